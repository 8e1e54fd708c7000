use egui::Pos2;

/// One entry in the drawing history: a recorded pointer position or a
/// stroke-boundary marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Point(Pos2),
    StrokeStart,
    StrokeStop,
}

/// Append-only log of every sample recorded this session, in draw order.
///
/// The store is the only gatekeeper: points and stop markers are accepted
/// only while a stroke is open (a `StrokeStart` more recent than any
/// `StrokeStop`), while a `StrokeStart` is always accepted. Nothing is ever
/// removed or reordered.
#[derive(Debug, Default)]
pub struct StrokeStore {
    history: Vec<Sample>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stroke is currently open, i.e. the most recent
    /// `StrokeStart` comes after the most recent `StrokeStop`.
    pub fn can_append_point(&self) -> bool {
        let last_start = self
            .history
            .iter()
            .rposition(|s| matches!(s, Sample::StrokeStart));
        let last_stop = self
            .history
            .iter()
            .rposition(|s| matches!(s, Sample::StrokeStop));
        match (last_start, last_stop) {
            (Some(start), Some(stop)) => start > stop,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Appends `sample` if it is a `StrokeStart` or a stroke is open.
    /// Returns whether the append happened; a rejection is a silent no-op,
    /// never an error (a dropped sample is just pointer motion outside a
    /// stroke).
    pub fn append(&mut self, sample: Sample) -> bool {
        if matches!(sample, Sample::StrokeStart) || self.can_append_point() {
            self.history.push(sample);
            true
        } else {
            false
        }
    }

    /// All samples in insertion order. Borrows the live history; the
    /// traversal is restartable and always finite.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn point(x: f32, y: f32) -> Sample {
        Sample::Point(pos2(x, y))
    }

    #[test]
    fn point_rejected_on_empty_history() {
        let mut store = StrokeStore::new();
        assert!(!store.can_append_point());
        assert!(!store.append(point(5.0, 5.0)));
        assert!(store.is_empty());
    }

    #[test]
    fn start_always_accepted() {
        let mut store = StrokeStore::new();
        assert!(store.append(Sample::StrokeStart));
        assert!(store.append(Sample::StrokeStop));
        // Closed stroke, a start still goes through.
        assert!(store.append(Sample::StrokeStart));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn single_stroke_records_in_order() {
        let mut store = StrokeStore::new();
        assert!(store.append(Sample::StrokeStart));
        assert!(store.append(point(1.0, 1.0)));
        assert!(store.append(point(2.0, 2.0)));
        assert!(store.append(Sample::StrokeStop));

        let recorded: Vec<_> = store.samples().copied().collect();
        assert_eq!(
            recorded,
            vec![
                Sample::StrokeStart,
                point(1.0, 1.0),
                point(2.0, 2.0),
                Sample::StrokeStop,
            ]
        );
    }

    #[test]
    fn point_rejected_after_stroke_closed() {
        let mut store = StrokeStore::new();
        assert!(store.append(Sample::StrokeStart));
        assert!(store.append(Sample::StrokeStop));
        assert!(!store.append(point(9.0, 9.0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stop_rejected_when_no_stroke_open() {
        let mut store = StrokeStore::new();
        assert!(!store.append(Sample::StrokeStop));
        store.append(Sample::StrokeStart);
        store.append(Sample::StrokeStop);
        assert!(!store.append(Sample::StrokeStop));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn two_consecutive_strokes() {
        let mut store = StrokeStore::new();
        let sequence = [
            Sample::StrokeStart,
            point(0.0, 0.0),
            Sample::StrokeStop,
            Sample::StrokeStart,
            point(1.0, 1.0),
            Sample::StrokeStop,
        ];
        for sample in sequence {
            assert!(store.append(sample));
        }
        let recorded: Vec<_> = store.samples().copied().collect();
        assert_eq!(recorded, sequence.to_vec());
    }

    #[test]
    fn doubled_start_keeps_stroke_open() {
        let mut store = StrokeStore::new();
        assert!(store.append(Sample::StrokeStart));
        assert!(store.append(Sample::StrokeStart));
        // A start still outranks the absent stop.
        assert!(store.append(point(3.0, 3.0)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn history_never_shrinks() {
        let mut store = StrokeStore::new();
        let mut previous = store.len();
        let mixed = [
            point(1.0, 1.0),
            Sample::StrokeStart,
            point(2.0, 2.0),
            Sample::StrokeStop,
            Sample::StrokeStop,
            point(3.0, 3.0),
            Sample::StrokeStart,
        ];
        for sample in mixed {
            store.append(sample);
            assert!(store.len() >= previous);
            previous = store.len();
        }
    }

    #[test]
    fn traversal_is_restartable() {
        let mut store = StrokeStore::new();
        store.append(Sample::StrokeStart);
        store.append(point(1.0, 2.0));

        let first: Vec<_> = store.samples().copied().collect();
        let second: Vec<_> = store.samples().copied().collect();
        assert_eq!(first, second);
    }
}
