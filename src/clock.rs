use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{error, info, trace};

use crate::cpu::Cpu;
use crate::error::Error;

/// Drives a [`Cpu`] one tick at a time at a configured rate, checking for a shutdown
/// signal between ticks. Mirrors the original source's goroutine-plus-channel driver
/// loop with a thread and an `mpsc` channel.
pub struct Clock {
    tick_period: Duration,
    shutdown: Receiver<()>,
}

impl Clock {
    pub fn new(tick_period: Duration) -> (Clock, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        (
            Clock {
                tick_period,
                shutdown: rx,
            },
            tx,
        )
    }

    /// Runs until a shutdown signal arrives, `cpu.max_ticks` is reached, or a tick
    /// returns a fatal error. A shutdown signal and hitting `max_ticks` both return
    /// `Ok(())`; a fatal error is propagated after being logged.
    pub fn run(&self, cpu: &mut Cpu) -> Result<(), Error> {
        info!("clock starting at {:?} per tick", self.tick_period);
        loop {
            match self.shutdown.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => {
                    info!("clock received shutdown signal");
                    return Ok(());
                }
                Err(TryRecvError::Empty) => {}
            }

            if let Some(max) = cpu.max_ticks {
                if cpu.tick_count >= max {
                    info!("clock reached max_ticks ({})", max);
                    return Ok(());
                }
            }

            trace!("pc=0x{:04X} opcode=0x{:02X}", cpu.pc, cpu.peek_u8());

            if let Err(err) = cpu.step() {
                error!("clock halted: {}", err);
                return Err(err);
            }

            thread::sleep(self.tick_period);
        }
    }

    /// Spawns `run` onto its own thread, returning the shutdown sender and the join
    /// handle the caller waits on. `Cpu` is not `Send` (it holds an `Rc`), so this is
    /// only usable when the caller constructs the `Cpu` on the spawned thread itself.
    pub fn spawn<F>(tick_period: Duration, build_and_run: F) -> (Sender<()>, JoinHandle<Result<(), Error>>)
    where
        F: FnOnce(Clock) -> Result<(), Error> + Send + 'static,
    {
        let (clock, tx) = Clock::new(tick_period);
        let handle = thread::spawn(move || build_and_run(clock));
        (tx, handle)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::Bus;

    #[test]
    fn test_run_stops_at_max_ticks() {
        let bus = Bus::new_shared();
        bus.borrow_mut().load(0x0200, &[0xEA, 0xEA, 0xEA]); // NOP NOP NOP
        let mut cpu = Cpu::new(bus);
        cpu.pc = 0x0200;
        cpu.max_ticks = Some(2);

        let (clock, _tx) = Clock::new(Duration::from_secs(0));
        clock.run(&mut cpu).unwrap();
        assert_eq!(cpu.tick_count, 2);
    }

    #[test]
    fn test_run_stops_on_shutdown_signal() {
        let bus = Bus::new_shared();
        bus.borrow_mut().load(0x0200, &[0xEA, 0xEA, 0xEA]);
        let mut cpu = Cpu::new(bus);
        cpu.pc = 0x0200;

        let (clock, tx) = Clock::new(Duration::from_secs(0));
        tx.send(()).unwrap();
        clock.run(&mut cpu).unwrap();
        assert_eq!(cpu.tick_count, 0);
    }

    #[test]
    fn test_run_propagates_fatal_decode_error() {
        let bus = Bus::new_shared();
        bus.borrow_mut().load(0x0200, &[0x02]); // undocumented opcode
        let mut cpu = Cpu::new(bus);
        cpu.pc = 0x0200;

        let (clock, _tx) = Clock::new(Duration::from_secs(0));
        assert!(clock.run(&mut cpu).is_err());
    }
}
