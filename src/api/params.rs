/// Query string parameters for a single API call.
///
/// Keys are unique and keep their insertion order; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
			Some(slot) => slot.1 = value,
			None => self.pairs.push((key, value)),
		}
	}

	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(existing, _)| existing == key)
			.map(|(_, value)| value.as_str())
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	pub(crate) fn as_pairs(&self) -> &[(String, String)] {
		&self.pairs
	}
}
