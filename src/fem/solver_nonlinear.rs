use super::{Assembler, BcPrescribedArray, Elements, FemBase, FemState, LinearSystem, Monitor, MonitorData};
use crate::base::{Config, Essential, Formulation, Mesh, Natural};
use crate::StrError;
use russell_lab::{vec_copy, vec_norm, vec_update, Norm, Vector};

/// Additive safety margin when clamping the pseudo-time step at the end time
const DT_CLAMP_EPS: f64 = 1e-10;

/// Tolerance to detect that the end time has been reached
const T_FIN_TOL: f64 = 1e-6;

/// Implements the incremental-iterative (Newton-Raphson) nonlinear solver
///
/// The solver advances the pseudo-time (proportional load factor) with an
/// adaptive step: steps that converge quickly grow the step, failed steps
/// (non-convergence, element failure, or divergence) cut it back by half and
/// retry from the last committed state. A backtracking line search damps the
/// Newton update when the full step does not sufficiently reduce the
/// residual. Prescribed DOFs are enforced with the zero-residual penalty
/// mode. Plastic history is committed only after a step converges.
pub struct SolverNonlinear<'a> {
    /// Holds configuration parameters
    pub config: &'a Config,

    /// Holds the collection of elements
    pub elements: Elements,

    /// Holds the prescribed displacement data
    pub bc_prescribed: BcPrescribedArray,

    /// Holds the global assembler
    assembler: Assembler,

    /// Holds the variables of the global linear system
    pub linear_system: LinearSystem<'a>,

    /// Handles notifications and cooperative cancellation
    pub monitor: Monitor,

    /// Reference external load pattern (scaled by pseudo-time)
    load_pattern: Vector,

    /// Auxiliary: trial displacement of the current iteration
    u_trial: Vector,

    /// Auxiliary: candidate displacement of the line search
    u_try: Vector,
}

impl<'a> SolverNonlinear<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &Mesh,
        base: &FemBase,
        config: &'a Config,
        essential: &Essential,
        natural: &Natural,
        monitor: Monitor,
    ) -> Result<Self, StrError> {
        if let Some(message) = config.validate() {
            println!("ERROR: {}", message);
            return Err("cannot allocate solver because config.validate() failed");
        }
        if config.formulation == Formulation::Linear {
            return Err("the linear formulation is handled by the linear driver");
        }
        let elements = Elements::new(mesh, base, config)?;
        let bc_prescribed = BcPrescribedArray::new(base, essential)?;
        let mut load_pattern = Vector::new(base.n_equation);
        for (point, pbc, value) in &natural.all {
            let eq = base.eq(*point, pbc.dof())?;
            load_pattern[eq] += *value;
        }
        let linear_system = LinearSystem::new(base, config, &bc_prescribed, &elements)?;
        let n_equation = base.n_equation;
        Ok(SolverNonlinear {
            config,
            elements,
            bc_prescribed,
            assembler: Assembler::new(),
            linear_system,
            monitor,
            load_pattern,
            u_trial: Vector::new(n_equation),
            u_try: Vector::new(n_equation),
        })
    }

    /// Builds the external force vector at the given pseudo-time
    fn calc_ff_ext(&mut self, t: f64) {
        for i in 0..self.linear_system.n_equation {
            self.linear_system.ff_ext[i] = self.load_pattern[i] * t;
        }
    }

    /// Computes the constrained residual R = F_ext - F_int with prescribed entries zeroed
    fn calc_rr(&mut self) {
        for i in 0..self.linear_system.n_equation {
            self.linear_system.rr[i] = self.linear_system.ff_ext[i] - self.linear_system.ff_int[i];
        }
        self.bc_prescribed.zero_residual(&mut self.linear_system.rr);
    }

    /// Performs the backtracking line search along the Newton direction
    ///
    /// Returns the accepted step length. The Armijo condition governs
    /// acceptance; when it never holds within the allowed sub-iterations, the
    /// best residual-reducing step found is accepted instead, and the fully
    /// shrunk step is the last resort.
    fn line_search(&mut self, res_norm_old: f64) -> Result<f64, StrError> {
        let config = self.config;
        let mut alpha = 1.0;
        let mut best_alpha = alpha;
        let mut best_norm = f64::INFINITY;
        for _ in 0..config.n_line_search {
            if self.monitor.interrupted() {
                break;
            }
            vec_copy(&mut self.u_try, &self.u_trial).unwrap();
            vec_update(&mut self.u_try, alpha, &self.linear_system.du).unwrap();
            let failed = self.assembler.assemble(
                &mut self.elements,
                &mut self.linear_system.kk,
                Some(&mut self.linear_system.ff_int),
                &mut self.linear_system.diag,
                &self.u_try,
            )?;
            if failed {
                alpha *= config.line_search_beta;
                continue;
            }
            self.calc_rr();
            let res_norm = vec_norm(&self.linear_system.rr, Norm::Euc);
            if res_norm < res_norm_old * (1.0 - config.line_search_c * alpha) {
                return Ok(alpha);
            }
            if res_norm < best_norm {
                best_norm = res_norm;
                best_alpha = alpha;
            }
            alpha *= config.line_search_beta;
        }
        if best_norm < res_norm_old {
            Ok(best_alpha)
        } else {
            Ok(alpha)
        }
    }

    /// Runs the analysis from t = 0 up to t = t_fin
    ///
    /// On cancellation, returns Ok with the last committed displacement in
    /// `state.uu`. On pseudo-time-step underflow, returns an error while
    /// `state.uu` still holds the last committed displacement.
    pub fn solve(&mut self, state: &mut FemState) -> Result<(), StrError> {
        let config = self.config;
        let t_fin = config.t_fin;
        state.dt = config.dt_init;
        let mut increment: usize = 0;

        self.monitor.print_header();

        while state.t < t_fin {
            if self.monitor.interrupted() {
                self.monitor.log("analysis cancelled; returning the last committed state".to_string());
                return Ok(());
            }

            // clamp the step at the end time
            if state.t + state.dt > t_fin {
                state.dt = t_fin - state.t + DT_CLAMP_EPS;
            }
            let t_new = state.t + state.dt;
            self.calc_ff_ext(t_new);

            // Newton-Raphson iterations
            state.duu.fill(0.0);
            let mut converged = false;
            let mut n_iterations = 0;
            for iteration in 0..config.n_max_iterations {
                n_iterations = iteration;
                if self.monitor.interrupted() {
                    self.monitor.log("analysis cancelled; returning the last committed state".to_string());
                    return Ok(());
                }

                // trial displacement and global assembly
                vec_copy(&mut self.u_trial, &state.uu).unwrap();
                vec_update(&mut self.u_trial, 1.0, &state.duu).unwrap();
                let failed = self.assembler.assemble(
                    &mut self.elements,
                    &mut self.linear_system.kk,
                    Some(&mut self.linear_system.ff_int),
                    &mut self.linear_system.diag,
                    &self.u_trial,
                )?;
                if failed {
                    self.monitor.log(format!(
                        "element failure at t = {:.4}: {}",
                        t_new,
                        self.assembler.last_failure.unwrap_or("unknown")
                    ));
                    break;
                }

                // residual with zero-residual penalty enforcement
                for i in 0..self.linear_system.n_equation {
                    self.linear_system.rr[i] = self.linear_system.ff_ext[i] - self.linear_system.ff_int[i];
                }
                self.bc_prescribed.apply_residual(
                    &mut self.linear_system.kk,
                    &mut self.linear_system.rr,
                    &self.linear_system.diag,
                    config.penalty_multiplier,
                )?;
                let res_norm = vec_norm(&self.linear_system.rr, Norm::Euc);

                // monitoring
                let data = MonitorData {
                    time: t_new,
                    dt: state.dt,
                    iteration,
                    residual: res_norm,
                    converged: res_norm < config.tol_rr,
                    increment,
                };
                self.monitor.send_data(data);

                // convergence check
                if res_norm < config.tol_rr {
                    converged = true;
                    self.monitor.print_iteration(&data, "converged");
                    break;
                }
                self.monitor.print_iteration(&data, if iteration == 0 { "start" } else { "..." });

                // sparse solve: K du = R
                if let Err(message) = self
                    .linear_system
                    .solver
                    .actual
                    .factorize(&mut self.linear_system.kk, Some(config.lin_sol_params))
                {
                    self.monitor.log(format!("linear solver failure: {}", message));
                    break;
                }
                if let Err(message) = self.linear_system.solver.actual.solve(
                    &mut self.linear_system.du,
                    &self.linear_system.kk,
                    &self.linear_system.rr,
                    false,
                ) {
                    self.monitor.log(format!("linear solver failure: {}", message));
                    break;
                }

                // divergence guard
                if vec_norm(&self.linear_system.du, Norm::Max) > config.divergence_limit {
                    self.monitor.log("divergence detected: huge displacement increment".to_string());
                    break;
                }

                // line search and update of the cumulated increment
                let alpha = self.line_search(res_norm)?;
                vec_update(&mut state.duu, alpha, &self.linear_system.du).unwrap();
            }

            // step control
            if converged {
                vec_update(&mut state.uu, 1.0, &state.duu).unwrap();
                state.t = t_new;
                increment += 1;

                // lock in the plastic history
                self.elements.commit_states();

                let percent = f64::min(100.0, 100.0 * state.t / t_fin);
                self.monitor.send_progress(percent as u8);

                if n_iterations < config.n_fast_iterations {
                    state.dt *= config.dt_growth;
                }
                if f64::abs(state.t - t_fin) < T_FIN_TOL {
                    break;
                }
            } else {
                state.dt *= 0.5;
                if state.dt < config.dt_min {
                    self.monitor.log("pseudo-time step underflow; aborting".to_string());
                    return Err("pseudo-time step fell below the allowed minimum");
                }
                self.monitor.log(format!("cutback: dt = {:.6e}", state.dt));
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
