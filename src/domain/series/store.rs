use super::data_point::{DataPoint, Field};
use chrono::NaiveDate;

/// Ordered, date-unique sequence of trading days for one session.
///
/// Only the loading step mutates it. Everything downstream works on a
/// [`SeriesView`], and trimming a view never touches the backing points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    points: Vec<DataPoint>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from points in any order. Points are sorted by date and
    /// repeated dates collapse to their first occurrence.
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        let mut store = Self { points };
        store.normalize();
        store
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn view(&self) -> SeriesView<'_> {
        SeriesView {
            points: &self.points,
        }
    }

    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }

    /// Appends points produced by synthesis. Existing points win over
    /// synthesized ones that land on the same date.
    pub(crate) fn append_synthesized(&mut self, points: Vec<DataPoint>) {
        self.points.extend(points);
        self.normalize();
    }

    fn normalize(&mut self) {
        // Stable sort keeps insertion order among equal dates, so dedup keeps the earliest.
        self.points.sort_by_key(|p| p.date);
        self.points.dedup_by_key(|p| p.date);
    }
}

/// Read-only window over a [`SeriesStore`].
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    points: &'a [DataPoint],
}

impl<'a> SeriesView<'a> {
    pub fn points(&self) -> &'a [DataPoint] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, DataPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&'a DataPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&'a DataPoint> {
        self.points.last()
    }

    /// Last `n` points (all of them when shorter).
    pub fn tail(&self, n: usize) -> SeriesView<'a> {
        let start = self.points.len().saturating_sub(n);
        SeriesView {
            points: &self.points[start..],
        }
    }

    /// Points from `from_end` before the end up to `to_end` before the end,
    /// i.e. `tail(from_end)` minus its last `to_end` points.
    pub fn between_from_end(&self, from_end: usize, to_end: usize) -> SeriesView<'a> {
        let len = self.points.len();
        let start = len.saturating_sub(from_end);
        let end = len.saturating_sub(to_end).max(start);
        SeriesView {
            points: &self.points[start..end],
        }
    }

    /// Valid values of `field` in chronological order; missing and NaN are skipped.
    pub fn values(&self, field: Field) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.valid(field)).collect()
    }

    /// Per-day values with gaps kept, for plotting against [`SeriesView::dates`].
    pub fn column(&self, field: Field) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.valid(field)).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Close of the final point, if it has a usable one.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().and_then(|p| p.valid(Field::Close))
    }
}

impl<'a> IntoIterator for SeriesView<'a> {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, d).unwrap()
    }

    fn point(d: u32, close: f64) -> DataPoint {
        let mut p = DataPoint::new(day(d));
        p.close = Some(close);
        p
    }

    #[test]
    fn test_from_points_sorts_and_dedups() {
        let store = SeriesStore::from_points(vec![point(3, 3.0), point(1, 1.0), point(3, 99.0)]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.view().dates(), vec![day(1), day(3)]);
        assert_eq!(store.view().values(Field::Close), vec![1.0, 3.0]);
    }

    #[test]
    fn test_append_synthesized_keeps_existing_on_collision() {
        let mut store = SeriesStore::from_points(vec![point(2, 2.0)]);
        store.append_synthesized(vec![point(2, 50.0), point(4, 4.0)]);

        assert_eq!(store.view().values(Field::Close), vec![2.0, 4.0]);
    }

    #[test]
    fn test_tail_and_between_do_not_mutate() {
        let store = SeriesStore::from_points((1..=10).map(|d| point(d, d as f64)).collect());
        let view = store.view();

        assert_eq!(view.tail(3).values(Field::Close), vec![8.0, 9.0, 10.0]);
        assert_eq!(view.tail(50).len(), 10);
        assert_eq!(
            view.between_from_end(5, 2).values(Field::Close),
            vec![6.0, 7.0, 8.0]
        );
        assert!(view.between_from_end(2, 5).is_empty());
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_values_skip_missing() {
        let mut gap = DataPoint::new(day(2));
        gap.close = Some(f64::NAN);
        let store = SeriesStore::from_points(vec![point(1, 1.0), gap, point(3, 3.0)]);

        assert_eq!(store.view().values(Field::Close), vec![1.0, 3.0]);
        assert_eq!(store.view().column(Field::Close), vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(store.view().last_close(), Some(3.0));
    }
}
