//! Provider identifiers used to key adapters in the registry.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const IDENTIFIER_MAX_LEN: usize = 64;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Provider identifier cannot be empty.")]
	Empty,
	/// The identifier contains whitespace characters.
	#[error("Provider identifier contains whitespace.")]
	ContainsWhitespace,
	/// The identifier contains upper-case characters.
	#[error("Provider identifier must be lower-case.")]
	NotLowercase,
	/// The identifier exceeded the allowed character count.
	#[error("Provider identifier exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Lower-case name identifying a social-identity provider (`linkedin`, `twitter`, ...).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);
impl ProviderId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Creates an identifier from a compile-time constant.
	///
	/// # Panics
	///
	/// Panics when `value` is not a valid identifier.
	pub fn from_static(value: &'static str) -> Self {
		if let Err(e) = validate_view(value) {
			panic!("Static provider identifier `{value}` is invalid: {e}");
		}

		Self(value.to_owned())
	}
}
impl Deref for ProviderId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ProviderId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ProviderId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<ProviderId> for String {
	fn from(value: ProviderId) -> Self {
		value.0
	}
}
impl TryFrom<String> for ProviderId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Provider({})", self.0)
	}
}
impl Display for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ProviderId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace);
	}
	if view.chars().any(char::is_uppercase) {
		return Err(IdentifierError::NotLowercase);
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_validate() {
		assert_eq!(ProviderId::new(""), Err(IdentifierError::Empty));
		assert_eq!(ProviderId::new("linked in"), Err(IdentifierError::ContainsWhitespace));
		assert_eq!(ProviderId::new("LinkedIn"), Err(IdentifierError::NotLowercase));
		assert!(ProviderId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());

		let id = ProviderId::new("linkedin").expect("Lower-case provider name should be valid.");

		assert_eq!(id.as_ref(), "linkedin");
		assert_eq!(format!("{id:?}"), "Provider(linkedin)");
		assert_eq!(ProviderId::from_static("linkedin"), id);
	}

	#[test]
	#[should_panic]
	fn static_identifiers_are_validated() {
		let _ = ProviderId::from_static("Linked In");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: ProviderId =
			serde_json::from_str("\"linkedin\"").expect("Provider should deserialize.");

		assert_eq!(&*id, "linkedin");
		assert!(serde_json::from_str::<ProviderId>("\"Linked In\"").is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: BTreeMap<ProviderId, u8> = BTreeMap::from_iter([(
			ProviderId::new("linkedin").expect("Provider used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("linkedin"), Some(&7));
	}
}
