use leptos::prelude::*;

/// Dropdown over `options`; falls back to the first option whenever the
/// current value is not among them.
#[component]
pub fn SelectInput(
	#[prop(into)] label: String,
	#[prop(into)] options: Signal<Vec<String>>,
	value: RwSignal<String>,
) -> impl IntoView {
	Effect::new(move |_| {
		let opts = options.get();
		if let Some(fallback) = fallback_selection(&opts, &value.get_untracked()) {
			value.set(fallback);
		}
	});

	view! {
		<label class="control">
			<span>{label}</span>
			<select
				on:change=move |ev| value.set(event_target_value(&ev))
				prop:value=move || value.get()
			>
				{move || {
					option_entries(options.get(), &value.get_untracked())
						.into_iter()
						.map(|(opt, text, selected)| {
							view! {
								<option value=opt selected=selected>
									{text}
								</option>
							}
						})
						.collect_view()
				}}
			</select>
		</label>
	}
}

/// Whole-number input that never goes below `min`.
#[component]
pub fn NumberInput(#[prop(into)] label: String, value: RwSignal<u32>, min: u32) -> impl IntoView {
	view! {
		<label class="control">
			<span>{label}</span>
			<input
				type="number"
				min=min.to_string()
				step="1"
				prop:value=move || value.get().to_string()
				on:change=move |ev| {
					if let Some(v) = parse_at_least(&event_target_value(&ev), min) {
						value.set(v);
					}
				}
			/>
		</label>
	}
}

/// The value to switch to when `current` is not among `options`.
fn fallback_selection(options: &[String], current: &str) -> Option<String> {
	if options.iter().any(|o| o == current) {
		return None;
	}
	let fallback = options.first().cloned().unwrap_or_default();
	(fallback != current).then_some(fallback)
}

/// Value, display text and selected flag for each `<option>`.
fn option_entries(options: Vec<String>, current: &str) -> Vec<(String, String, bool)> {
	options
		.into_iter()
		.map(|opt| {
			let selected = opt == current;
			(opt.clone(), opt, selected)
		})
		.collect()
}

fn parse_at_least(raw: &str, min: u32) -> Option<u32> {
	raw.trim().parse::<u32>().ok().map(|v| v.max(min))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn options_carry_value_and_text() {
		let entries = option_entries(names(&["Pad Thai", "Vegan Chili"]), "Vegan Chili");
		assert_eq!(
			entries,
			vec![
				("Pad Thai".to_string(), "Pad Thai".to_string(), false),
				("Vegan Chili".to_string(), "Vegan Chili".to_string(), true),
			]
		);
	}

	#[test]
	fn selection_falls_back_to_the_first_option() {
		let opts = names(&["a", "b"]);
		assert_eq!(fallback_selection(&opts, "b"), None);
		assert_eq!(fallback_selection(&opts, ""), Some("a".to_string()));
		assert_eq!(fallback_selection(&[], "gone"), Some(String::new()));
		assert_eq!(fallback_selection(&[], ""), None);
	}

	#[test]
	fn number_input_clamps_to_minimum() {
		assert_eq!(parse_at_least(" 7 ", 3), Some(7));
		assert_eq!(parse_at_least("1", 3), Some(3));
		assert_eq!(parse_at_least("abc", 3), None);
		assert_eq!(parse_at_least("-2", 3), None);
	}
}
