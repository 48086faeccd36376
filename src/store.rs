/// Records of one screen, newest first. Records can only be added.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> RecordList<T> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Builds a list holding `records` in the given order.
    pub fn seeded(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn prepend(&mut self, record: T) {
        self.records.insert(0, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_puts_newest_first() {
        let mut list = RecordList::seeded(["b", "c"]);
        list.prepend("a");
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(list.first(), Some(&"a"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn empty_list() {
        let list: RecordList<u8> = RecordList::default();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }
}
