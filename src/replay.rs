use egui::Pos2;

use crate::store::Sample;

/// One paintable stroke produced by a traversal of the history.
///
/// `counter` is the 1-based sample counter at the moment the path was handed
/// off for painting, which is what drives its sweep hue.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    pub points: Vec<Pos2>,
    pub counter: usize,
}

/// One full forward traversal of the sample log.
///
/// A `StrokeStart` begins a fresh path (discarding anything accumulated, so
/// samples orphaned between two consecutive starts are never painted); a
/// `Point` extends the current path, the first one placing the pen and later
/// ones drawing straight segments; a `StrokeStop` hands the path off. After
/// the traversal the current path is handed off once more so a stroke still
/// being drawn stays visible.
pub fn stroke_paths<'a>(samples: impl Iterator<Item = &'a Sample>) -> Vec<StrokePath> {
    let mut paths = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();
    let mut counter = 0usize;

    for sample in samples {
        counter += 1;
        match sample {
            Sample::StrokeStart => {
                current.clear();
            }
            Sample::Point(pos) => {
                current.push(*pos);
            }
            Sample::StrokeStop => {
                paths.push(StrokePath {
                    points: current.clone(),
                    counter,
                });
            }
        }
    }

    if !current.is_empty() && paths.last().map(|p| &p.points) != Some(&current) {
        paths.push(StrokePath {
            points: current,
            counter,
        });
    }

    paths
}
