use std::sync::{atomic::{AtomicU8, AtomicUsize, Ordering}, Arc};
use std::mem::MaybeUninit;
use std::cell::UnsafeCell;

// slot states: a slot moves VACANT -> WRITING -> READY exactly once,
// and READY -> VACANT when its value is taken.
const VACANT: u8 = 0;
const WRITING: u8 = 1;
const READY: u8 = 2;

#[repr(align(64))]
struct Slot<T> {
    state: AtomicU8,
    value: UnsafeCell<MaybeUninit<T>>,
}

// values only ever move in (write) or out (take) under an exclusive state claim,
// no `&T` is handed out, so `T: Send` is enough for sharing slots across threads.
unsafe impl<T: Send> Send for Slot<T> {}
unsafe impl<T: Send> Sync for Slot<T> {}

/// ### -> `Slots<T>` - a fixed-size, index-addressed, write-once results buffer.
///
/// `Slots<T>` is the fan-in target of every concurrent fan-out in this crate. The
/// buffer is sized up front, each producer writes its result at its own index, and
/// the consumer collects the values strictly in index order once every producer
/// has finished. Appending is never involved, so completion order cannot leak into
/// the result order.
///
/// - No lock is taken: producers write disjoint slots.
/// - Each slot is claimed with a compare-exchange, so a second write to the same
///   index is detected and panics instead of racing.
/// - Values left in the buffer are dropped with it.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::mpmc::slots::Slots;
///
/// let slots = Slots::<String>::allocate(3);
///
/// std::thread::scope(|scope| {
///     for index in (0..3).rev() {
///         let slots = &slots;
///         scope.spawn(move || slots.write(index, index.to_string()));
///     }
/// });
///
/// assert_eq!(slots.filled(), 3);
/// assert_eq!(slots.collect(), vec!["0", "1", "2"]);
/// ```
pub struct Slots<T> {
    slots: Box<[Slot<T>]>,
    filled: AtomicUsize,
    capacity: usize,
}

impl <T> Slots<T> {
    pub fn allocate(capacity: usize) -> Arc<Self> {
        Arc::new(Self::allocate_raw(capacity))
    }

    pub fn allocate_raw(capacity: usize) -> Self {
        let mut vector = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            vector.push(Slot { state: AtomicU8::new(VACANT), value: UnsafeCell::new(MaybeUninit::uninit()), });
        }

        Self {
            slots: vector.into_boxed_slice(),
            filled: AtomicUsize::new(0),
            capacity,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots written so far.
    #[inline(always)]
    pub fn filled(&self) -> usize {
        self.filled.load(Ordering::Acquire)
    }

    #[inline(always)]
    pub fn is_ready(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.state.load(Ordering::Acquire) == READY)
    }

    /// Stores `value` at `index`.
    ///
    /// Panics when `index >= capacity` or when the slot has already been written,
    /// both of which mean two producers were handed the same index.
    #[inline(always)]
    pub fn write(&self, index: usize, value: T) {
        assert!(index < self.capacity, "Invariant violation: slot index {} out of bounds (capacity {}).", index, self.capacity);
        let slot = &self.slots[index];

        if slot.state.compare_exchange(VACANT, WRITING, Ordering::Acquire, Ordering::Relaxed).is_err() {
            panic!("Invariant violation: slot at index {} written twice.", index);
        }

        unsafe {
            (*slot.value.get()).as_mut_ptr().write(value);
        }
        slot.state.store(READY, Ordering::Release);
        self.filled.fetch_add(1, Ordering::Release);
    }

    /// Moves the value out of `index`, leaving the slot vacant.
    /// Returns `None` when nothing has been written there (yet).
    #[inline(always)]
    pub fn take(&self, index: usize) -> Option<T> {
        let slot = self.slots.get(index)?;

        if slot.state.compare_exchange(READY, WRITING, Ordering::Acquire, Ordering::Relaxed).is_err() {
            return None;
        }

        let value = unsafe { (*slot.value.get()).as_ptr().read() };
        slot.state.store(VACANT, Ordering::Release);
        self.filled.fetch_sub(1, Ordering::Release);
        Some(value)
    }

    /// Takes every value in index order.
    ///
    /// Must only be called after all producers have finished: a vacant slot at this
    /// point is an invariant violation and panics.
    pub fn collect(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.capacity);
        for index in 0..self.capacity {
            match self.take(index) {
                Some(value) => values.push(value),
                None => panic!("Invariant violation: slot at index {} is vacant after all writers finished (capacity {}).", index, self.capacity),
            }
        }
        values
    }
}

impl <T> Drop for Slots<T> {
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            if *slot.state.get_mut() == READY {
                unsafe {
                    slot.value.get_mut().assume_init_drop();
                }
            }
        }
    }
}
