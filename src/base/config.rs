use super::Formulation;
use russell_sparse::{Genie, LinSolParams};

/// Holds configuration parameters for the nonlinear analysis
pub struct Config {
    /// Element formulation
    pub formulation: Formulation,

    /// Final pseudo-time, i.e. the load factor at the end of the analysis
    pub t_fin: f64,

    /// Initial pseudo-time step
    pub dt_init: f64,

    /// Minimum allowed pseudo-time step (smaller values abort the analysis)
    pub dt_min: f64,

    /// Growth factor applied to the pseudo-time step after a fast-converging step
    pub dt_growth: f64,

    /// Number of iterations below which a step counts as fast-converging
    pub n_fast_iterations: usize,

    /// Maximum number of Newton-Raphson iterations per step
    pub n_max_iterations: usize,

    /// Tolerance for the Euclidean norm of the residual vector
    pub tol_rr: f64,

    /// Maximum number of line-search sub-iterations
    pub n_line_search: usize,

    /// Step reduction factor of the backtracking line search
    pub line_search_beta: f64,

    /// Sufficient-decrease (Armijo) parameter of the line search
    pub line_search_c: f64,

    /// Penalty multiplier for prescribed (Dirichlet) degrees of freedom
    ///
    /// The penalty coefficient is `max|diag(K)|` times this multiplier.
    pub penalty_multiplier: f64,

    /// Ceiling on the magnitude of any displacement-increment component
    pub divergence_limit: f64,

    /// Linear solver kind
    pub lin_sol_genie: Genie,

    /// Parameters for the linear (sparse) solver
    pub lin_sol_params: LinSolParams,

    /// Prints the convergence table while solving
    pub verbose_iterations: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            formulation: Formulation::TotalLagrangian,
            t_fin: 1.0,
            dt_init: 0.05,
            dt_min: 1e-6,
            dt_growth: 1.5,
            n_fast_iterations: 5,
            n_max_iterations: 15,
            tol_rr: 1e-3,
            n_line_search: 5,
            line_search_beta: 0.5,
            line_search_c: 1e-4,
            penalty_multiplier: 1e9,
            divergence_limit: 1e6,
            lin_sol_genie: Genie::Umfpack,
            lin_sol_params: LinSolParams::new(),
            verbose_iterations: true,
        }
    }

    /// Sets the element formulation
    pub fn set_formulation(&mut self, formulation: Formulation) -> &mut Self {
        self.formulation = formulation;
        self
    }

    /// Sets the final pseudo-time (load factor)
    pub fn set_t_fin(&mut self, t_fin: f64) -> &mut Self {
        self.t_fin = t_fin;
        self
    }

    /// Sets the initial pseudo-time step
    pub fn set_dt_init(&mut self, dt_init: f64) -> &mut Self {
        self.dt_init = dt_init;
        self
    }

    /// Sets the minimum allowed pseudo-time step
    pub fn set_dt_min(&mut self, dt_min: f64) -> &mut Self {
        self.dt_min = dt_min;
        self
    }

    /// Sets the maximum number of Newton-Raphson iterations per step
    pub fn set_n_max_iterations(&mut self, n: usize) -> &mut Self {
        self.n_max_iterations = n;
        self
    }

    /// Sets the tolerance for the residual norm
    pub fn set_tol_rr(&mut self, tol: f64) -> &mut Self {
        self.tol_rr = tol;
        self
    }

    /// Sets the penalty multiplier for prescribed DOFs
    pub fn set_penalty_multiplier(&mut self, multiplier: f64) -> &mut Self {
        self.penalty_multiplier = multiplier;
        self
    }

    /// Sets the linear solver kind
    pub fn set_lin_sol_genie(&mut self, genie: Genie) -> &mut Self {
        self.lin_sol_genie = genie;
        self
    }

    /// Enables or disables the convergence table
    pub fn set_verbose_iterations(&mut self, flag: bool) -> &mut Self {
        self.verbose_iterations = flag;
        self
    }

    /// Validates all data; returns a message with the first error found
    pub fn validate(&self) -> Option<String> {
        if self.t_fin <= 0.0 {
            return Some(format!("t_fin = {:?} is incorrect; it must be > 0.0", self.t_fin));
        }
        if self.dt_init <= 0.0 || self.dt_init > self.t_fin {
            return Some(format!(
                "dt_init = {:?} is incorrect; it must be > 0.0 and ≤ t_fin",
                self.dt_init
            ));
        }
        if self.dt_min <= 0.0 {
            return Some(format!("dt_min = {:?} is incorrect; it must be > 0.0", self.dt_min));
        }
        if self.dt_growth <= 1.0 {
            return Some(format!(
                "dt_growth = {:?} is incorrect; it must be > 1.0",
                self.dt_growth
            ));
        }
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {:?} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if self.tol_rr <= 0.0 {
            return Some(format!("tol_rr = {:?} is incorrect; it must be > 0.0", self.tol_rr));
        }
        if self.n_line_search < 1 {
            return Some(format!(
                "n_line_search = {:?} is incorrect; it must be ≥ 1",
                self.n_line_search
            ));
        }
        if self.line_search_beta <= 0.0 || self.line_search_beta >= 1.0 {
            return Some(format!(
                "line_search_beta = {:?} is incorrect; it must be in (0.0, 1.0)",
                self.line_search_beta
            ));
        }
        if self.line_search_c <= 0.0 || self.line_search_c >= 1.0 {
            return Some(format!(
                "line_search_c = {:?} is incorrect; it must be in (0.0, 1.0)",
                self.line_search_c
            ));
        }
        if self.penalty_multiplier <= 0.0 {
            return Some(format!(
                "penalty_multiplier = {:?} is incorrect; it must be > 0.0",
                self.penalty_multiplier
            ));
        }
        if self.divergence_limit <= 0.0 {
            return Some(format!(
                "divergence_limit = {:?} is incorrect; it must be > 0.0",
                self.divergence_limit
            ));
        }
        None
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::Formulation;
    use russell_sparse::Genie;

    #[test]
    fn new_and_setters_work() {
        let mut config = Config::new();
        assert_eq!(config.formulation, Formulation::TotalLagrangian);
        assert_eq!(config.t_fin, 1.0);
        assert_eq!(config.dt_init, 0.05);
        assert_eq!(config.tol_rr, 1e-3);
        config
            .set_formulation(Formulation::UpdatedLagrangian)
            .set_t_fin(2.0)
            .set_dt_init(0.1)
            .set_dt_min(1e-8)
            .set_n_max_iterations(20)
            .set_tol_rr(1e-6)
            .set_penalty_multiplier(1e12)
            .set_lin_sol_genie(Genie::Umfpack)
            .set_verbose_iterations(false);
        assert_eq!(config.formulation, Formulation::UpdatedLagrangian);
        assert_eq!(config.t_fin, 2.0);
        assert_eq!(config.n_max_iterations, 20);
        assert_eq!(config.penalty_multiplier, 1e12);
        assert!(!config.verbose_iterations);
        assert_eq!(config.validate(), None);
    }

    #[test]
    fn validate_captures_errors() {
        let mut config = Config::new();
        config.set_t_fin(-1.0);
        assert_eq!(
            config.validate(),
            Some("t_fin = -1.0 is incorrect; it must be > 0.0".to_string())
        );

        let mut config = Config::new();
        config.set_dt_init(2.0);
        assert_eq!(
            config.validate(),
            Some("dt_init = 2.0 is incorrect; it must be > 0.0 and ≤ t_fin".to_string())
        );

        let mut config = Config::new();
        config.set_dt_min(0.0);
        assert_eq!(
            config.validate(),
            Some("dt_min = 0.0 is incorrect; it must be > 0.0".to_string())
        );

        let mut config = Config::new();
        config.dt_growth = 1.0;
        assert_eq!(
            config.validate(),
            Some("dt_growth = 1.0 is incorrect; it must be > 1.0".to_string())
        );

        let mut config = Config::new();
        config.set_n_max_iterations(0);
        assert_eq!(
            config.validate(),
            Some("n_max_iterations = 0 is incorrect; it must be ≥ 1".to_string())
        );

        let mut config = Config::new();
        config.set_tol_rr(0.0);
        assert_eq!(
            config.validate(),
            Some("tol_rr = 0.0 is incorrect; it must be > 0.0".to_string())
        );

        let mut config = Config::new();
        config.line_search_beta = 1.0;
        assert_eq!(
            config.validate(),
            Some("line_search_beta = 1.0 is incorrect; it must be in (0.0, 1.0)".to_string())
        );

        let mut config = Config::new();
        config.set_penalty_multiplier(-1.0);
        assert_eq!(
            config.validate(),
            Some("penalty_multiplier = -1.0 is incorrect; it must be > 0.0".to_string())
        );
    }
}
