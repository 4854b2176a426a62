use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Holds per-iteration monitoring data
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MonitorData {
    /// Target pseudo-time of the step in progress
    pub time: f64,

    /// Current pseudo-time step
    pub dt: f64,

    /// Newton iteration index within the step
    pub iteration: usize,

    /// Euclidean norm of the constrained residual
    pub residual: f64,

    /// Whether the step has converged
    pub converged: bool,

    /// Count of committed increments so far
    pub increment: usize,
}

/// Defines the one-way notifications sent by the solver to the caller
#[derive(Clone, Debug)]
pub enum SolverUpdate {
    /// A log line (convergence table rows, cutback notices)
    Log(String),

    /// Per-iteration monitoring data
    Increment(MonitorData),

    /// Overall progress in percent (0 to 100)
    Progress(u8),
}

/// Handles progress/log notifications and cooperative cancellation
///
/// Without a channel, log lines go to the console only (when verbose). The
/// interrupt flag is shared: any holder of a clone can request cancellation
/// and the solver polls it at the top of every iteration.
pub struct Monitor {
    /// Optional notification channel
    sender: Option<Sender<SolverUpdate>>,

    /// Cancellation flag polled by the solver
    interrupt: Arc<AtomicBool>,

    /// Prints log lines to the console
    verbose: bool,
}

impl Monitor {
    /// Allocates a monitor without a channel (console only)
    pub fn new(verbose: bool) -> Self {
        Monitor {
            sender: None,
            interrupt: Arc::new(AtomicBool::new(false)),
            verbose,
        }
    }

    /// Allocates a monitor with a notification channel and a shared interrupt flag
    pub fn new_with_channel(sender: Sender<SolverUpdate>, interrupt: Arc<AtomicBool>, verbose: bool) -> Self {
        Monitor {
            sender: Some(sender),
            interrupt,
            verbose,
        }
    }

    /// Returns a shared handle to the interrupt flag
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupt.clone()
    }

    /// Requests cancellation of the running solve
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested
    pub fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Emits a log line
    pub fn log(&self, line: String) {
        if self.verbose {
            println!("{}", line);
        }
        if let Some(sender) = &self.sender {
            sender.send(SolverUpdate::Log(line)).ok();
        }
    }

    /// Prints the header of the convergence table
    pub fn print_header(&self) {
        self.log(format!(
            "{:<10} {:<10} {:<5} {:<14} STATUS",
            "TIME", "dt", "ITER", "RESIDUAL"
        ));
        self.log("-".repeat(55));
    }

    /// Emits one row of the convergence table
    pub fn print_iteration(&self, data: &MonitorData, status: &str) {
        self.log(format!(
            "{:<10.4} {:<10.4} {:<5} {:<14.6e} {}",
            data.time, data.dt, data.iteration, data.residual, status
        ));
    }

    /// Sends per-iteration monitoring data
    pub fn send_data(&self, data: MonitorData) {
        if let Some(sender) = &self.sender {
            sender.send(SolverUpdate::Increment(data)).ok();
        }
    }

    /// Sends overall progress in percent
    pub fn send_progress(&self, percent: u8) {
        if let Some(sender) = &self.sender {
            sender.send(SolverUpdate::Progress(percent)).ok();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
