use polarplot::scenes::{
    lemniscate::{self, LemniscateOptions},
    SceneArgs,
};

const USAGE: &str = "Usage: lemniscate_arc_length [config=<options.json>] [samples=<n>] [json=<figure.json>] [png=<figure.png>]";

fn main() {
    env_logger::init();

    let args = match SceneArgs::<LemniscateOptions>::parse(std::env::args().skip(1)) {
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

    let scene = lemniscate::build(&args.options).unwrap_or_else(|err| {
        eprintln!("Failed to build the diagram: {err}");
        std::process::exit(1);
    });

    print!("{}", scene.report());

    if let Err(err) = args.write_outputs(&scene.figure) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
