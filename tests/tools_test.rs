mod common;

use assert2::{check, let_assert};
use common::{IsolatedSite, isolated_site};
use gantt_docs::theme::Theme;
use gantt_docs::tools::{
    GetExampleRequest, OpenSectionRequest, SetThemeRequest, ThemeMode, handle_get_example,
    handle_open_section, handle_set_theme,
};
use gantt_docs::{Catalog, SiteState, ThemeStore};
use rstest::rstest;

fn open(site: &IsolatedSite, id: &str) -> Result<String, String> {
    handle_open_section(&site.state, &OpenSectionRequest { id: id.to_string() })
}

fn example(site: &IsolatedSite, id: &str, line_numbers: bool) -> Result<String, String> {
    handle_get_example(
        &site.state,
        &GetExampleRequest {
            id: id.to_string(),
            line_numbers,
        },
    )
}

fn theme(site: &IsolatedSite, mode: Option<ThemeMode>) -> Result<String, String> {
    handle_set_theme(&site.state, &SetThemeRequest { mode })
}

// --- open_section ---

#[rstest]
fn open_section_reports_route_anchor_and_samples(isolated_site: IsolatedSite) {
    let_assert!(Ok(output) = open(&isolated_site, "gantt-chart"));

    check!(output.starts_with("# GanttChart Component\n"));
    check!(output.contains("Route: /components\n"));
    check!(output.contains("Anchor: #gantt-chart"));
    check!(output.contains("- `basic-usage`: Simple Implementation (jsx)"));
    check!(output.contains("- `gantt-chart-import`: Importing the component (tsx)"));
}

#[rstest]
fn open_section_on_home_page(isolated_site: IsolatedSite) {
    let_assert!(Ok(output) = open(&isolated_site, "installation"));
    check!(output.contains("Route: /\n"));
    check!(output.contains("Anchor: #installation"));
    check!(output.contains("(bash)"));
}

#[rstest]
fn open_section_without_samples(isolated_site: IsolatedSite) {
    let_assert!(Ok(output) = open(&isolated_site, "examples"));
    check!(!output.contains("Code samples:"));
}

#[rstest]
fn unknown_section_suggests_close_ids(isolated_site: IsolatedSite) {
    let_assert!(Err(message) = open(&isolated_site, "gant-chart"));
    check!(message.contains("Did you mean"));
    check!(message.contains("`gantt-chart`"));
}

#[rstest]
fn unknown_section_lists_available_ids(isolated_site: IsolatedSite) {
    let_assert!(Err(message) = open(&isolated_site, "qqqqqqqq"));
    check!(message.contains("Available sections:"));
    check!(message.contains("troubleshooting"));
}

// --- get_example ---

#[rstest]
fn example_renders_with_line_numbers(isolated_site: IsolatedSite) {
    let_assert!(Ok(output) = example(&isolated_site, "installation", true));

    check!(output.starts_with("Add React Modern Gantt to your project using npm or yarn.\n\n"));
    check!(output.contains("<!-- theme: light -->"));
    check!(output.contains("**Install with npm or yarn**"));
    check!(output.contains("```bash\n1 | npm install react-modern-gantt\n"));
}

#[rstest]
fn example_without_line_numbers(isolated_site: IsolatedSite) {
    let_assert!(Ok(output) = example(&isolated_site, "task-interfaces", false));
    check!(output.contains("```typescript\n// Task interface\n"));
}

#[rstest]
fn example_follows_current_theme(isolated_site: IsolatedSite) {
    check!(theme(&isolated_site, Some(ThemeMode::Dark)).is_ok());
    let_assert!(Ok(output) = example(&isolated_site, "core-props", true));
    check!(output.contains("<!-- theme: dark -->"));
}

#[rstest]
fn unknown_example_lists_ids(isolated_site: IsolatedSite) {
    let_assert!(Err(message) = example(&isolated_site, "missing", true));
    check!(message.contains("Code sample 'missing' not found."));
    check!(message.contains("basic-usage"));
}

// --- set_theme ---

#[rstest]
fn theme_without_mode_reports_current(isolated_site: IsolatedSite) {
    let_assert!(Ok(output) = theme(&isolated_site, None));
    check!(output.starts_with("Current theme: light"));
    check!(output.contains("  background: bg-white"));
    check!(!isolated_site.theme_file().exists());
}

#[rstest]
fn theme_toggle_persists_and_notifies(isolated_site: IsolatedSite) {
    let mut receiver = isolated_site.state.theme().subscribe();

    let_assert!(Ok(output) = theme(&isolated_site, Some(ThemeMode::Toggle)));
    check!(output.starts_with("Theme set to dark"));
    check!(output.contains("  highlight: bg-gray-800 text-indigo-400"));

    check!(*receiver.borrow_and_update() == Theme::Dark);
    let reopened = ThemeStore::open(isolated_site.theme_file(), false);
    check!(reopened.current() == Theme::Dark);
}

#[rstest]
#[case(ThemeMode::Light, "light")]
#[case(ThemeMode::Dark, "dark")]
fn theme_set_explicit(
    isolated_site: IsolatedSite,
    #[case] mode: ThemeMode,
    #[case] expected: &str,
) {
    let_assert!(Ok(output) = theme(&isolated_site, Some(mode)));
    check!(output.starts_with(&format!("Theme set to {}", expected)));
}

#[test]
fn system_preference_seeds_theme() {
    let site = IsolatedSite::new(true);
    let_assert!(Ok(output) = theme(&site, None));
    check!(output.starts_with("Current theme: dark"));
}

// --- configuration ---

#[rstest]
fn state_from_config_uses_catalog_override(isolated_site: IsolatedSite) {
    let catalog = isolated_site.write_file(
        "custom/catalog.toml",
        r#"
            [[entry]]
            id = "faq"
            title = "FAQ"
            path = "/faq"
            category = "Support"
            description = "Frequently asked questions"
        "#,
    );

    let config = gantt_docs::Config {
        catalog_path: Some(catalog),
        theme_path: isolated_site.path().join("other-theme.toml"),
        prefer_dark: false,
        search_limit: 5,
    };
    let_assert!(Ok(state) = SiteState::from_config(&config));
    check!(state.catalog().len() == 1);
    check!(state.search_limit() == 5);
    check!(state.catalog().search("faq")[0].entry.id == "faq");
}

#[rstest]
fn state_from_config_rejects_bad_catalog(isolated_site: IsolatedSite) {
    let catalog = isolated_site.write_file("bad.toml", "[[entry]]\nid = 3\n");
    let config = gantt_docs::Config {
        catalog_path: Some(catalog),
        theme_path: isolated_site.theme_file(),
        prefer_dark: false,
        search_limit: 10,
    };

    let_assert!(Err(error) = SiteState::from_config(&config));
    check!(format!("{:#}", error).contains("Failed to load catalog"));
}

#[test]
fn builtin_catalog_matches_state() {
    let site = IsolatedSite::new(false);
    check!(site.state.catalog().len() == Catalog::builtin().unwrap().len());
}
