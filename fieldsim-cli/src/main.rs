use clap::{Parser, Subcommand, ValueEnum};
use fieldsim_core::{
    build, draw_field_grid, run_simulation, Canvas, NullCanvas, Scenario, ScenarioKind,
};

mod viewer_app;

#[derive(Parser)]
#[command(name = "fieldsim")]
#[command(about = "Turtle-style physics teaching scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario
    Run {
        /// Scenario to run
        scenario: ScenarioArg,
        /// Run without a window and print the final body states
        #[arg(long)]
        headless: bool,
    },
    /// List the built-in scenarios
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Spring,
    Damped,
    Orbits,
    Charges,
}

impl From<ScenarioArg> for ScenarioKind {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Spring => ScenarioKind::Spring,
            ScenarioArg::Damped => ScenarioKind::DampedOscillator,
            ScenarioArg::Orbits => ScenarioKind::Orbits,
            ScenarioArg::Charges => ScenarioKind::Charges,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario, headless } => {
            let result = if headless {
                run_headless(scenario.into())
            } else {
                run_viewer(scenario.into())
            };
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::List => {
            for kind in ScenarioKind::ALL {
                println!("{}", kind.label());
            }
        }
    }
}

fn run_headless(kind: ScenarioKind) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario: Scenario = build(kind)?;
    let mut canvas = NullCanvas::default();
    log::info!("running '{}' headless", scenario.label);

    canvas.batch_frames(scenario.ticks_per_frame);
    scenario.sim.attach_markers(&mut canvas);
    if let Some(grid) = scenario.grid {
        draw_field_grid(&scenario.sim.world, grid.field, grid.spacing, &mut canvas)?;
    }
    run_simulation(&mut scenario.sim, &mut canvas, scenario.tick_pacing)?;

    println!(
        "{}: finished after {:.2}s of simulated time ({} ticks)",
        scenario.label,
        scenario.sim.elapsed_time(),
        scenario.sim.current_step
    );
    for body in &scenario.sim.world.bodies {
        println!(
            "  {}: pos = ({:.3}, {:.3}) vel = ({:.3}, {:.3})",
            body.name, body.pos.x, body.pos.y, body.vel.x, body.vel.y
        );
    }
    Ok(())
}

fn run_viewer(kind: ScenarioKind) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "fieldsim",
        options,
        Box::new(move |cc| Ok(Box::new(viewer_app::ViewerApp::new(kind, cc)))),
    )?;
    Ok(())
}
