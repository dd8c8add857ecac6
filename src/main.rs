//! reads the clustering dump `output.txt` from the current directory and
//! renders its clusters as a scatter plot in `clusters.png`, one color per
//! cluster. No arguments, no environment variables.

use anyhow::Context;

use clusterplot::cluster::load_clusters;
use clusterplot::plot::ScatterPlot;

const CLUSTER_FILE: &str = "output.txt";
const PLOT_FILE: &str = "clusters.png";

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();
    //
    let clusters =
        load_clusters(CLUSTER_FILE).with_context(|| format!("could not load {}", CLUSTER_FILE))?;
    log::info!("got {} clusters", clusters.get_nb_cluster());
    //
    ScatterPlot::new().render(&clusters, PLOT_FILE)?;
    println!("plot written to {}", PLOT_FILE);
    Ok(())
}
