use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info, warn};

use apple1_cpu::clock::Clock;
use apple1_cpu::config::Config;
use apple1_cpu::cpu::Cpu;
use apple1_cpu::error::Error;
use apple1_cpu::logging;
use apple1_cpu::memory::Bus;

#[derive(Parser)]
#[command(name = "apple1", version, about = "A MOS 6502 CPU core, clock-driven to completion or fatal halt.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a raw program image and run it until shutdown or a fatal halt.
    Run {
        path: PathBuf,

        #[arg(long)]
        load_address: Option<u16>,

        #[arg(long)]
        clock_hz: Option<f64>,

        #[arg(long)]
        max_ticks: Option<u64>,
    },
    /// Print the crate version.
    Version,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Run {
            path,
            load_address,
            clock_hz,
            max_ticks,
        } => run(path, load_address, clock_hz, max_ticks),
    }
}

fn run(path: PathBuf, load_address: Option<u16>, clock_hz: Option<f64>, max_ticks: Option<u64>) -> Result<(), Error> {
    let mut config = Config::from_env();
    if let Some(addr) = load_address {
        config.load_address = addr;
    }
    if let Some(hz) = clock_hz {
        config.clock_hz = hz;
    }
    if max_ticks.is_some() {
        config.max_ticks = max_ticks;
    }

    let program = fs::read(&path)?;
    let available = 0x1_0000 - config.load_address as usize;
    if program.len() > available {
        warn!(
            "program is {} bytes but only {} are available from 0x{:04X}",
            program.len(),
            available,
            config.load_address
        );
        return Err(Error::ProgramTooLarge {
            len: program.len(),
            available,
        });
    }

    let bus = Bus::new_shared();
    bus.borrow_mut().load(config.load_address, &program);
    info!("loaded {} bytes at 0x{:04X}", program.len(), config.load_address);

    let mut cpu = Cpu::new(bus);
    if config.use_reset_vector {
        cpu.reset();
    } else {
        cpu.pc = config.load_address;
    }
    cpu.max_ticks = config.max_ticks;

    let (clock, _shutdown) = Clock::new(config.tick_period());
    clock.run(&mut cpu)
}
