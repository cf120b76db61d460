//! Positional URL template expansion (`people/~/network/updates?count={count}&start={start}`).

// self
use crate::{error::ConfigError, oauth1::percent_encode};

/// Expands `{name}` placeholders with `params`.
///
/// Each distinct name consumes the next parameter in order of first appearance; repeated
/// names reuse the value already bound. Values are percent-encoded so they are safe in both
/// path and query positions.
pub fn expand(template: &str, params: &[&str]) -> Result<String, ConfigError> {
	let mut names = Vec::<&str>::new();
	let mut out = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);

		let after = &rest[open + 1..];
		let close = after
			.find('}')
			.ok_or_else(|| ConfigError::MalformedTemplate { template: template.into() })?;
		let name = &after[..close];
		let index = match names.iter().position(|known| *known == name) {
			Some(index) => index,
			None => {
				names.push(name);

				names.len() - 1
			},
		};

		if let Some(value) = params.get(index) {
			out.push_str(&percent_encode(value));
		}

		rest = &after[close + 1..];
	}

	out.push_str(rest);

	if names.len() != params.len() {
		return Err(ConfigError::TemplateArity {
			template: template.into(),
			expected: names.len(),
			supplied: params.len(),
		});
	}

	Ok(out)
}
