//! Handlebars templates for fields and the settings page
//!
//! Field templates are single-line so the markup is stable to compare.
//! `{{x}}` is HTML-escaped by Handlebars, `{{{x}}}` is only used for markup
//! that was already filtered or produced by the host.

pub const DESCRIPTION: &str = concat!(
	r#"<p class="description">{{{description}}}"#,
	r#"{{#if has_example}}<br/><strong>{{example_label}}</strong>: <code>{{example}}</code>{{/if}}"#,
	r#"</p>"#,
);

pub const TEXT_FIELD: &str = concat!(
	r#"{{#if disabled}}<input type="hidden" name="{{name}}" value="{{value}}">{{/if}}"#,
	r#"<input type="{{input_type}}" id="{{key}}" class="large-text" name="{{name}}" value="{{value}}""#,
	r#"{{#if disabled}} disabled="disabled"{{/if}}{{#if readonly}} readonly="readonly"{{/if}}>"#,
	r#"{{> description}}"#,
);

pub const CHECKBOX: &str = concat!(
	r#"<input type="hidden" id="{{key}}-shadow" name="{{name}}" value="{{shadow_value}}">"#,
	r#"<input type="checkbox" id="{{key}}" name="{{name}}" value="1""#,
	r#"{{#if checked}} checked="checked"{{/if}}"#,
	r#"{{#if disabled}} disabled="disabled"{{/if}}{{#if readonly}} readonly="readonly"{{/if}}>"#,
	r#"{{> description}}"#,
);

pub const SELECT: &str = concat!(
	r#"{{#if disabled}}<input type="hidden" name="{{name}}" value="{{value}}">{{/if}}"#,
	r#"<select name="{{name}}" id="{{key}}"{{#if disabled}} disabled="disabled"{{/if}}>"#,
	r#"{{#each options}}<option value="{{value}}""#,
	r#"{{#if selected}} selected="selected"{{/if}}{{#if locked}} disabled="disabled"{{/if}}>"#,
	r#"{{label}}</option>{{/each}}"#,
	r#"</select>"#,
	r#"{{> description}}"#,
);

pub const SECTION_DESCRIPTION: &str = r#"<p>{{text}}</p>"#;

pub const PAGE: &str = r#"<div class="wrap openid-connect-admin">
<h2>{{#if logo_url}}<img class="openid-connect-logo" src="{{logo_url}}" alt=""> {{/if}}{{title}}</h2>
<form method="post" action="{{form_action}}">
{{{settings_fields}}}
{{{sections}}}
{{{submit_button}}}
</form>
<h4>{{notes_label}}</h4>
<p class="description"><strong>{{redirect_uri_label}}</strong> <code>{{redirect_uri}}</code></p>
<p class="description"><strong>{{login_button_label}}</strong> <code>{{login_button_shortcode}}</code></p>
<p class="description"><strong>{{auth_url_label}}</strong> <code>{{auth_url_shortcode}}</code></p>
{{#if show_logs}}<h2>{{logs_label}}</h2>
<div id="logger-table-wrapper">{{{logs_table}}}</div>
{{/if}}</div>
"#;

// vim: ts=4
