use polarplot::{
    curve::PolarCurve,
    display::{angle_label, fixed},
    scenes::{
        cardioid::{self, CardioidOptions},
        SceneArgs,
    },
};

const USAGE: &str = "Usage: cardioid_limacon [config=<options.json>] [samples=<n>] [json=<figure.json>] [png=<figure.png>]";

fn main() {
    env_logger::init();

    let args = match SceneArgs::<CardioidOptions>::parse(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            eprintln!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(1);
        }
    };

    let options = &args.options;
    let scene = cardioid::build(options).unwrap_or_else(|err| {
        eprintln!("Failed to build the diagram: {err}");
        std::process::exit(1);
    });

    println!("{}", cardioid::TITLE);
    println!("  {}  vs  {}", options.cardioid.equation(), options.limacon.equation());
    for check in &scene.checks {
        let point = format!("({}, {})", fixed(check.point.x, 3), fixed(check.point.y, 3));
        let gap = check
            .radius_gap()
            .map_or_else(|| "-".to_string(), |gap| fixed(gap, 3));
        let verdict = if check.holds() {
            "intersection".to_string()
        } else {
            format!("not an intersection (residual {})", fixed(check.residual, 3))
        };
        println!(
            "  {:<12} {point:<18} |Δr| = {gap:<8} {verdict}",
            angle_label(check.theta)
        );
    }

    if let Err(err) = args.write_outputs(&scene.figure) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
