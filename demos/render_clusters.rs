//! renders a cluster dump with selectable input and output paths.
//!
//! ```text
//! render_clusters --file output.txt --out clusters.png --width 1024 --height 768
//! ```

use clap::{Arg, ArgAction, Command};

use clusterplot::cluster::load_clusters;
use clusterplot::plot::ScatterPlot;

pub fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    //
    let matches = Command::new("render_clusters")
        .arg(
            Arg::new("file")
                .long("file")
                .required(false)
                .action(ArgAction::Set)
                .default_value("output.txt")
                .help("cluster dump to read"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .required(false)
                .action(ArgAction::Set)
                .default_value("clusters.png")
                .help("bitmap to write"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u32))
                .default_value("1024")
                .help("plot width in pixels"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u32))
                .default_value("768")
                .help("plot height in pixels"),
        )
        .get_matches();
    //
    let file = matches.get_one::<String>("file").unwrap();
    let out = matches.get_one::<String>("out").unwrap();
    let width = *matches.get_one::<u32>("width").unwrap();
    let height = *matches.get_one::<u32>("height").unwrap();
    //
    let clusters = load_clusters(file)?;
    log::info!("got {} clusters from {}", clusters.get_nb_cluster(), file);
    ScatterPlot::new()
        .with_size(width, height)
        .render(&clusters, out)?;
    println!("plot written to {}", out);
    Ok(())
}
