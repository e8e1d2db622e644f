use std::sync::{Condvar, Mutex};

/// Counting semaphore built over a mutex-guarded permit count and a
/// condition variable. `acquire` blocks while no permit is available;
/// wake-up order among several blocked threads is whatever the platform
/// condition variable provides.
#[derive(Debug)]
pub struct Semaphore {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    pub fn new(initial_permits: usize) -> Self {
        Semaphore {
            permits: Mutex::new(initial_permits),
            available: Condvar::new(),
        }
    }

    /// Blocks until a permit can be taken, then takes it.
    pub fn acquire(&self) {
        let mut permits = self.permits.lock().unwrap();
        while *permits == 0 {
            permits = self.available.wait(permits).unwrap();
        }
        *permits -= 1;
    }

    /// Adds one permit and wakes one blocked acquirer, if any.
    pub fn release(&self) {
        *self.permits.lock().unwrap() += 1;
        self.available.notify_one();
    }
}

#[cfg(test)]
mod tests_semaphore {
    use super::Semaphore;

    use std::{
        sync::{mpsc::channel, Arc},
        thread,
    };

    #[test]
    fn test01_initial_permit_can_be_reacquired_ok() {
        let semaphore = Semaphore::new(1);
        semaphore.acquire();
        semaphore.release();
        semaphore.acquire();
    }

    #[test]
    fn test02_semaphore_works_as_mutex_ok() {
        let semaphore = Arc::new(Semaphore::new(1));
        let semaphore_clone = semaphore.clone();
        let handle = thread::spawn(move || {
            semaphore_clone.acquire();
            semaphore_clone.release();
        });

        semaphore.acquire();
        semaphore.release();
        handle.join().unwrap();
    }

    #[test]
    fn test03_release_unblocks_waiting_thread_ok() {
        // Child blocks first and the parent signals.
        let (done_sender, done_receiver) = channel();
        let semaphore = Arc::new(Semaphore::new(0));
        let semaphore_clone = semaphore.clone();
        let handle = thread::spawn(move || {
            semaphore_clone.acquire();
            done_sender.send(()).unwrap();
        });
        semaphore.release();
        done_receiver.recv().unwrap();
        handle.join().unwrap();

        // Parent blocks and the child signals.
        let semaphore = Arc::new(Semaphore::new(0));
        let semaphore_clone = semaphore.clone();
        let handle = thread::spawn(move || {
            semaphore_clone.release();
        });
        semaphore.acquire();
        handle.join().unwrap();
    }

    #[test]
    fn test04_two_permits_admit_two_threads_at_once_ok() {
        // Parent and child both hold a permit at the same time and
        // shake hands before releasing.
        let semaphore = Arc::new(Semaphore::new(2));
        let semaphore_clone = semaphore.clone();
        let (parent_sender, parent_receiver) = channel();
        let (child_sender, child_receiver) = channel();
        let handle = thread::spawn(move || {
            semaphore_clone.acquire();
            child_receiver.recv().unwrap();
            parent_sender.send(()).unwrap();
            semaphore_clone.release();
        });
        semaphore.acquire();
        child_sender.send(()).unwrap();
        parent_receiver.recv().unwrap();
        semaphore.release();
        handle.join().unwrap();
    }
}
