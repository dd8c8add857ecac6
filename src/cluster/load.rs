//! parsing of the cluster dump file.
//! One cluster per marker line:
//! ```text
//! cluster <id>: <pid>[x1,y1] <pid>[x2,y2] ...
//! ```
//! The producing program prefixes each bracketed pair with the point id; that
//! prefix is dropped here and bare `[x,y]` tokens parse as well.
//! Lines not beginning with the marker are skipped.

use anyhow::{Context, anyhow};

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::points::{ClusterId, ClusterSet, Point};

/// lines not beginning with this token are ignored
const CLUSTER_MARKER: &str = "cluster";

// a point token is the bracketed pair, possibly prefixed with a point id.
// strip enclosing brackets, keep what follows the last remaining bracket, split on ','
fn parse_point(token: &str) -> anyhow::Result<Point> {
    let stripped = token.trim_matches(['[', ']']);
    let coords = stripped.rsplit('[').next().unwrap_or(stripped);
    let mut fields = coords.split(',');
    let x = fields
        .next()
        .ok_or_else(|| anyhow!("empty point token {}", token))?;
    let y = fields
        .next()
        .ok_or_else(|| anyhow!("no y coordinate in token {}", token))?;
    if fields.next().is_some() {
        return Err(anyhow!("more than 2 coordinates in token {}", token));
    }
    let x = x
        .trim()
        .parse::<i64>()
        .with_context(|| format!("bad x coordinate in token {}", token))?;
    let y = y
        .trim()
        .parse::<i64>()
        .with_context(|| format!("bad y coordinate in token {}", token))?;
    Ok((x, y))
} // end of parse_point

// header is "cluster <id>", body the whitespace separated point tokens
fn parse_marker_line(line: &str) -> anyhow::Result<(ClusterId, Vec<Point>)> {
    let (header, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("no ':' in cluster line"))?;
    let id = header
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| anyhow!("no cluster id in header {}", header))?;
    let id = id
        .parse::<ClusterId>()
        .with_context(|| format!("bad cluster id in header {}", header))?;
    let points = body
        .split_whitespace()
        .map(parse_point)
        .collect::<anyhow::Result<Vec<Point>>>()?;
    Ok((id, points))
} // end of parse_marker_line

/// parse lines, keeping marker lines only. Pure function of its input.
/// A repeated cluster id keeps its rank, the later points win.
pub fn parse_lines<I, S>(lines: I) -> anyhow::Result<ClusterSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut clusters = ClusterSet::new();
    for (numline, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if !line.starts_with(CLUSTER_MARKER) {
            continue;
        }
        let (id, points) = parse_marker_line(line)
            .with_context(|| format!("parse error at line {}", numline + 1))?;
        clusters.insert(id, points);
    }
    Ok(clusters)
} // end of parse_lines

/// read a cluster dump file. The file is held open for the read loop only.
pub fn load_clusters<P: AsRef<Path>>(path: P) -> anyhow::Result<ClusterSet> {
    let filepath = path.as_ref();
    let fileres = OpenOptions::new().read(true).open(filepath);
    if fileres.is_err() {
        log::error!("load_clusters {:?}", filepath.as_os_str());
        return Err(anyhow!(
            "load_clusters could not open file {}",
            filepath.display()
        ));
    }
    let bufreader = BufReader::new(fileres?);
    let lines = bufreader.lines().collect::<Result<Vec<String>, _>>()?;
    let clusters = parse_lines(&lines)?;
    log::info!(
        "load_clusters read {} clusters from {}",
        clusters.get_nb_cluster(),
        filepath.display()
    );
    Ok(clusters)
} // end of load_clusters

//========================================================

// end of mod tests
