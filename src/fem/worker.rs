use super::{recover_nodal_stresses, FemBase, FemState, Monitor, NodalStresses, SolverNonlinear, SolverUpdate};
use crate::base::{Config, Essential, Mesh, Natural};
use crate::StrError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Holds the results of a background solve
pub struct SolverResults {
    /// Final state: last committed displacements, time reached, last step size
    pub state: FemState,

    /// Recovered nodal stresses at the final displacement
    pub stresses: NodalStresses,

    /// Failure reported by the solver, if any (e.g. step underflow)
    ///
    /// Even on failure the state holds the last committed displacement.
    pub failure: Option<StrError>,
}

/// Runs one nonlinear solve on a dedicated worker thread
///
/// The worker owns its inputs; progress/log updates flow through the
/// `updates` channel and `cancel` trips the cooperative interrupt flag.
/// Running two solves over the same model concurrently is the caller's
/// responsibility to avoid.
pub struct SolverWorker {
    /// Receives log, monitoring, and progress updates
    pub updates: Receiver<SolverUpdate>,

    /// Cancels the solve when set
    pub interrupt: Arc<AtomicBool>,

    /// Join handle of the worker thread
    handle: JoinHandle<Result<SolverResults, StrError>>,
}

impl SolverWorker {
    /// Spawns the worker thread and starts the solve immediately
    pub fn spawn(mesh: Mesh, base: FemBase, config: Config, essential: Essential, natural: Natural) -> Self {
        let (sender, updates) = channel();
        let interrupt = Arc::new(AtomicBool::new(false));
        let flag = interrupt.clone();
        let handle = thread::spawn(move || {
            let monitor = Monitor::new_with_channel(sender, flag, false);
            let mut solver = SolverNonlinear::new(&mesh, &base, &config, &essential, &natural, monitor)?;
            let mut state = FemState::new(&base, &config)?;
            let failure = solver.solve(&mut state).err();
            let stresses = recover_nodal_stresses(&mesh, &solver.elements, &state.uu)?;
            Ok(SolverResults {
                state,
                stresses,
                failure,
            })
        });
        SolverWorker {
            updates,
            interrupt,
            handle,
        }
    }

    /// Requests cancellation of the running solve
    pub fn cancel(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Waits for the worker to finish and returns its results
    pub fn join(self) -> Result<SolverResults, StrError> {
        match self.handle.join() {
            Ok(results) => results,
            Err(_) => Err("solver worker thread panicked"),
        }
    }
}
