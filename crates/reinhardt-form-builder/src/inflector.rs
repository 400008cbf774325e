//! Word inflection for field and model names
//!
//! Covers the handful of transformations form naming needs: singular and
//! plural forms of association names, human-readable labels, and the
//! conventional model name for a foreign key.

const UNCOUNTABLE: &[&str] = &[
	"equipment",
	"information",
	"rice",
	"money",
	"species",
	"series",
	"fish",
	"sheep",
	"news",
	"data",
];

const IRREGULAR: &[(&str, &str)] = &[
	("person", "people"),
	("man", "men"),
	("woman", "women"),
	("child", "children"),
	("mouse", "mice"),
	("goose", "geese"),
	("tooth", "teeth"),
	("foot", "feet"),
];

/// Split a snake_case name so the last word can be inflected on its own.
fn split_last_word(word: &str) -> (&str, &str) {
	match word.rfind('_') {
		Some(index) => (&word[..=index], &word[index + 1..]),
		None => ("", word),
	}
}

fn is_vowel(c: char) -> bool {
	matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Plural form of a snake_case word (the last segment is inflected).
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::inflector::pluralize;
///
/// assert_eq!(pluralize("author_id"), "author_ids");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// ```
pub fn pluralize(word: &str) -> String {
	let (prefix, last) = split_last_word(word);
	if last.is_empty() || UNCOUNTABLE.contains(&last) {
		return word.to_string();
	}
	if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == last) {
		return format!("{prefix}{plural}");
	}
	if let Some((_, plural)) = IRREGULAR.iter().find(|(_, plural)| *plural == last) {
		return format!("{prefix}{plural}");
	}

	let plural = if last.ends_with("quiz") {
		format!("{last}zes")
	} else if last.ends_with("ss")
		|| last.ends_with('x')
		|| last.ends_with("ch")
		|| last.ends_with("sh")
		|| last.ends_with('z')
	{
		format!("{last}es")
	} else if ES_AFTER_S.iter().any(|root| last.ends_with(root)) {
		format!("{last}es")
	} else if last.ends_with('s') {
		last.to_string()
	} else if let Some(stem) = last.strip_suffix('y') {
		if stem.chars().last().is_some_and(is_vowel) {
			format!("{last}s")
		} else {
			format!("{stem}ies")
		}
	} else if let Some(stem) = last.strip_suffix("fe") {
		format!("{stem}ves")
	} else if last.ends_with("lf") || last.ends_with("rf") {
		format!("{}ves", &last[..last.len() - 1])
	} else {
		format!("{last}s")
	};

	format!("{prefix}{plural}")
}

/// Plurals whose stem the generic suffix rules would cut wrongly.
const SES_TO_SIS: &[&str] = &["analy", "ba", "diagno", "parenthe", "progno", "synop", "the"];
const ES_AFTER_S: &[&str] = &["alias", "status", "bus", "census"];

fn singular_by_rule(last: &str) -> Option<String> {
	if last.ends_with("movies") {
		return last.strip_suffix('s').map(str::to_string);
	}
	if last == "databases" {
		return Some("database".to_string());
	}
	if let Some(stem) = last.strip_suffix("ses") {
		if SES_TO_SIS.contains(&stem) {
			return Some(format!("{stem}sis"));
		}
	}
	if let Some(stem) = last.strip_suffix("es") {
		if ES_AFTER_S.iter().any(|root| stem.ends_with(root)) {
			return Some(stem.to_string());
		}
	}
	if let Some(stem) = last.strip_suffix("zes") {
		if stem.ends_with("quiz") {
			return Some(stem.to_string());
		}
	}
	None
}

/// Singular form of a snake_case word (the last segment is inflected).
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::inflector::singularize;
///
/// assert_eq!(singularize("authors"), "author");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("tag_addresses"), "tag_address");
/// ```
pub fn singularize(word: &str) -> String {
	let (prefix, last) = split_last_word(word);
	if last.is_empty() || UNCOUNTABLE.contains(&last) {
		return word.to_string();
	}
	if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == last) {
		return format!("{prefix}{singular}");
	}
	if IRREGULAR.iter().any(|(singular, _)| *singular == last) {
		return word.to_string();
	}

	let singular = if let Some(stem) = singular_by_rule(last) {
		stem
	} else if let Some(stem) = last.strip_suffix("ies") {
		format!("{stem}y")
	} else if let Some(stem) = last.strip_suffix("ves") {
		if stem.ends_with('l') || stem.ends_with('r') {
			format!("{stem}f")
		} else {
			format!("{stem}fe")
		}
	} else if last.ends_with("sses")
		|| last.ends_with("xes")
		|| last.ends_with("ches")
		|| last.ends_with("shes")
		|| last.ends_with("zes")
	{
		last[..last.len() - 2].to_string()
	} else if last.ends_with("ss") || last.ends_with("us") || last.ends_with("is") {
		last.to_string()
	} else if let Some(stem) = last.strip_suffix('s') {
		stem.to_string()
	} else {
		last.to_string()
	};

	format!("{prefix}{singular}")
}

/// Capitalize the first character.
pub fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Human-readable form of an attribute name.
///
/// Drops a trailing `_id`, turns underscores into spaces and capitalizes the
/// first word only.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::inflector::humanize;
///
/// assert_eq!(humanize("author_id"), "Author");
/// assert_eq!(humanize("published_at"), "Published at");
/// ```
pub fn humanize(name: &str) -> String {
	let trimmed = name.strip_suffix("_id").unwrap_or(name);
	let spaced = trimmed.trim_matches('_').replace('_', " ");
	capitalize(&spaced.to_lowercase())
}

/// Like [`humanize`] but capitalizes every word.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::inflector::titleize;
///
/// assert_eq!(titleize("published_at"), "Published At");
/// ```
pub fn titleize(name: &str) -> String {
	humanize(name)
		.split(' ')
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

/// UpperCamelCase form of a snake_case name.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::inflector::camelize;
///
/// assert_eq!(camelize("blog_post"), "BlogPost");
/// ```
pub fn camelize(name: &str) -> String {
	name.split('_')
		.filter(|segment| !segment.is_empty())
		.map(capitalize)
		.collect()
}

/// snake_case form of a CamelCase model name.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::inflector::underscore;
///
/// assert_eq!(underscore("BlogPost"), "blog_post");
/// assert_eq!(underscore("HTTPRequest"), "http_request");
/// ```
pub fn underscore(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut result = String::with_capacity(name.len() + 4);

	for (i, &ch) in chars.iter().enumerate() {
		if ch == '-' || ch == ' ' || ch == ':' {
			if !result.ends_with('_') && !result.is_empty() {
				result.push('_');
			}
			continue;
		}
		if ch.is_ascii_uppercase() && i > 0 && !result.ends_with('_') {
			let prev = chars[i - 1];
			let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
			if prev.is_ascii_lowercase()
				|| prev.is_ascii_digit()
				|| (prev.is_ascii_uppercase() && next_is_lower)
			{
				result.push('_');
			}
		}
		result.push(ch.to_ascii_lowercase());
	}

	result
}

/// Conventional model name for a foreign-key attribute (`author_id` → `Author`).
pub fn model_name_for_foreign_key(field: &str) -> String {
	camelize(field.strip_suffix("_id").unwrap_or(field))
}
