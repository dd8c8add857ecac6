//! scatter plot of a [ClusterSet] with the plotters bitmap backend.
//! Each cluster is a filled circle series colored by its identifier modulo
//! the palette size and labeled in the legend.

use plotters::prelude::*;

use std::path::Path;

use crate::cluster::points::{ClusterId, ClusterSet};

/// fixed palette, cycled through by cluster id modulo its size
pub const PALETTE: [RGBColor; 7] = [BLUE, GREEN, RED, CYAN, MAGENTA, YELLOW, BLACK];

/// color attached to a cluster identifier
pub fn color_for(id: ClusterId) -> RGBColor {
    PALETTE[id as usize % PALETTE.len()]
}

const POINT_SIZE: i32 = 3;

/// Plot layout. Defaults match the historical dump viewer:
/// title "Cluster Values", axes "X" and "Y", 1024x768 bitmap.
pub struct ScatterPlot {
    title: String,
    x_label: String,
    y_label: String,
    size: (u32, u32),
}

impl Default for ScatterPlot {
    fn default() -> Self {
        ScatterPlot {
            title: String::from("Cluster Values"),
            x_label: String::from("X"),
            y_label: String::from("Y"),
            size: (1024, 768),
        }
    }
}

impl ScatterPlot {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    // axis ranges from the data bounds with a 5% padding so points do not sit
    // on the frame. An all empty cluster set gets a default unit range.
    fn get_ranges(&self, clusters: &ClusterSet) -> (std::ops::Range<i64>, std::ops::Range<i64>) {
        let ((xmin, ymin), (xmax, ymax)) = clusters.get_minmax().unwrap_or(((0, 0), (1, 1)));
        let xpad = (((xmax - xmin).max(1)) as f64 * 0.05).ceil() as i64;
        let ypad = (((ymax - ymin).max(1)) as f64 * 0.05).ceil() as i64;
        ((xmin - xpad)..(xmax + xpad), (ymin - ypad)..(ymax + ypad))
    }

    /// render each cluster in stored order, add mesh, axis labels and legend,
    /// then write the bitmap at path
    pub fn render<P: AsRef<Path>>(&self, clusters: &ClusterSet, path: P) -> anyhow::Result<()> {
        let (x_range, y_range) = self.get_ranges(clusters);
        //
        let root = BitMapBackend::new(path.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(self.title.as_str(), ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;
        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .draw()?;
        //
        for (id, points) in clusters.iter() {
            let color = color_for(id);
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), POINT_SIZE, color.filled())),
                )?
                .label(format!("Cluster {}", id))
                .legend(move |(x, y)| Circle::new((x, y), POINT_SIZE, color.filled()));
        }
        //
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
        log::debug!(
            "rendered {} clusters to {}",
            clusters.get_nb_cluster(),
            path.as_ref().display()
        );
        Ok(())
    } // end of render
} // end of impl ScatterPlot

//========================================================

// end of mod tests
