//! Read-only projections of LinkedIn JSON documents.

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Member profile returned by `people/~:(...)` and inside connection listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	/// Opaque LinkedIn member identifier.
	pub id: String,
	/// Given name.
	#[serde(default)]
	pub first_name: String,
	/// Family name.
	#[serde(default)]
	pub last_name: String,
	/// Professional headline.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub headline: Option<String>,
	/// Industry label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub industry: Option<String>,
	/// Public profile URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub public_profile_url: Option<String>,
	/// Profile picture URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub picture_url: Option<String>,
	/// Free-text summary.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub summary: Option<String>,
	/// Authenticated link to the member's standard profile page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub site_standard_profile_request: Option<SiteStandardProfileRequest>,
}
impl Profile {
	/// `"{first} {last}"`, exactly as LinkedIn returned the two parts.
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	/// URL of the member's standard profile page, when LinkedIn returned one.
	pub fn standard_profile_url(&self) -> Option<&str> {
		self.site_standard_profile_request.as_ref().map(|request| request.url.as_str())
	}
}

/// `siteStandardProfileRequest` sub-document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStandardProfileRequest {
	/// Standard profile URL.
	pub url: String,
}

/// First-degree connections of the authenticated member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
	/// Total connection count reported by LinkedIn.
	#[serde(rename = "_total", default)]
	pub total: u64,
	/// Connection profiles in server order.
	#[serde(default)]
	pub values: Vec<Profile>,
}

/// One page of the member's network updates feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkUpdates {
	/// Total update count reported by LinkedIn.
	#[serde(rename = "_total", default)]
	pub total: u64,
	/// Offset of the first returned update, when reported.
	#[serde(rename = "_start", default, skip_serializing_if = "Option::is_none")]
	pub start: Option<u32>,
	/// Number of updates in this page, when reported.
	#[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
	pub count: Option<u32>,
	/// Updates in server order.
	#[serde(default)]
	pub values: Vec<NetworkUpdate>,
}

/// Single network update; the content is left uninterpreted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkUpdate {
	/// Milliseconds since the Unix epoch.
	#[serde(default)]
	pub timestamp: i64,
	/// Stable key identifying the update.
	#[serde(default)]
	pub update_key: String,
	/// LinkedIn update type code (`CONN`, `SHAR`, `PROF`, ...).
	#[serde(default)]
	pub update_type: String,
	/// Raw update payload.
	#[serde(default)]
	pub update_content: Value,
}

/// Request cursor for paginated feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Page {
	/// Zero-based offset of the first item.
	pub start: u32,
	/// Maximum number of items to return.
	pub count: u32,
}
impl Page {
	/// Creates a cursor at `start` returning at most `count` items.
	pub const fn new(start: u32, count: u32) -> Self {
		Self { start, count }
	}
}
impl Default for Page {
	fn default() -> Self {
		Self::new(0, 100)
	}
}
