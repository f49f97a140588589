/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{debug, error, info};
use std::io::{self, Write};
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::cli::Cli;
use elevator_sim::elevator::{request_channels, ElevatorFSM, TerminateClock};
use elevator_sim::output::{self, OutputFormat};
use elevator_sim::shared::{ElevatorState, StatusEvent};
use elevator_sim::{cli, input, unwrap_or_exit};

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let cli = Cli::parse();
    let (config, source) = unwrap_or_exit!(cli.resolve_config());

    println!("*** Elevator simulator ***");
    for line in cli::settings_banner(&config, source) {
        println!("{}", line);
    }
    for line in input::available_actions(config.building.n_floors) {
        println!("{}", line);
    }

    // Initialize channels
    let (request_panel, request_channels) = request_channels(config.building.n_floors);
    let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
    let (state_tx, state_rx) = cbc::unbounded::<ElevatorState>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the elevator
    let elevator_fsm = ElevatorFSM::new(
        &config,
        request_channels,
        status_tx,
        state_tx,
        Box::new(TerminateClock::new(terminate_rx)),
    );
    let elevator_fsm_thread = unwrap_or_exit!(Builder::new()
        .name("elevator_fsm".into())
        .spawn(move || elevator_fsm.run()));

    // Start the status output. A dead sink stops the simulation.
    let format = cli.format;
    let output_terminate_tx = terminate_tx.clone();
    let output_thread = unwrap_or_exit!(Builder::new()
        .name("status_output".into())
        .spawn(move || {
            if let Err(e) = output::run(status_rx, format, io::stdout()) {
                error!("Status output failed: {}", e);
                let _ = output_terminate_tx.send(());
            }
        }));

    unwrap_or_exit!(Builder::new()
        .name("state_log".into())
        .spawn(move || {
            for state in state_rx.iter() {
                debug!("Elevator state: {:?}", state);
            }
        }));

    // Start the console input
    let feedback: Box<dyn Write + Send> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    unwrap_or_exit!(Builder::new()
        .name("console_input".into())
        .spawn(move || {
            if let Err(e) = input::run(request_panel, io::stdin().lock(), feedback) {
                error!("Console input failed: {}", e);
            }
        }));

    // Wait for the elevator to finish
    let result = match elevator_fsm_thread.join() {
        Ok(result) => result,
        Err(_) => {
            error!("Elevator thread panicked");
            std::process::exit(1);
        }
    };
    drop(terminate_tx);

    match result {
        Ok(()) => {
            if output_thread.join().is_err() {
                error!("Status output thread panicked");
                std::process::exit(1);
            }
            info!("Simulation finished");
        }
        Err(e) => {
            error!("Elevator error: {}", e);
            std::process::exit(1);
        }
    }
}
