use solsim::base::{Config, Dof, Essential, Mesh, Natural, Pbc};
use solsim::fem::{FemBase, FemState, Monitor, SolverNonlinear, SolverUpdate};
use solsim::material::ParamSolid;
use solsim::StrError;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::channel;
use std::sync::Arc;

// A self-intersecting cell (bottom and top faces swapped) makes every
// assembly fail, so the solver must cut the pseudo-time step back repeatedly
// and finally abort at the minimum step size, leaving the committed (zero)
// displacement untouched.
#[test]
fn inverted_element_cuts_back_then_aborts() -> Result<(), StrError> {
    let mut mesh = Mesh::one_hex8();
    mesh.cells[0].points = vec![4, 5, 6, 7, 0, 1, 2, 3];
    let base = FemBase::new(&mesh, [(1, ParamSolid::sample_linear_elastic())])?;
    let mut config = Config::new();
    config.set_verbose_iterations(false);

    let mut essential = Essential::new();
    essential.points(&[0, 1, 2, 3], Dof::Uz, 0.0);
    let mut natural = Natural::new();
    natural.points(&[4, 5, 6, 7], Pbc::Fz, 0.25);

    let (sender, receiver) = channel();
    let monitor = Monitor::new_with_channel(sender, Arc::new(AtomicBool::new(false)), false);
    let mut solver = SolverNonlinear::new(&mesh, &base, &config, &essential, &natural, monitor)?;
    let mut state = FemState::new(&base, &config)?;
    assert_eq!(
        solver.solve(&mut state).err(),
        Some("pseudo-time step fell below the allowed minimum")
    );

    // nothing was ever committed
    assert_eq!(state.t, 0.0);
    for i in 0..state.uu.dim() {
        assert_eq!(state.uu[i], 0.0);
    }

    // the log shows at least one cutback before the abort
    let n_cutbacks = receiver
        .try_iter()
        .filter(|update| match update {
            SolverUpdate::Log(line) => line.starts_with("cutback"),
            _ => false,
        })
        .count();
    assert!(n_cutbacks >= 1);
    Ok(())
}
