pub mod custom_semaphore;
