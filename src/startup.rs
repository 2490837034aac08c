use crate::config::DEFAULT_ASSET_DIR;
use crate::error::Result;
use crate::state::AppState;
use crate::ui::image_display::{ImageDisplay, ImageTarget, LogoSide};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::ffi::OsString;
use std::path::PathBuf;

/// Picks the asset directory: the first positional argument, else `./public`.
pub fn asset_root_from_args<I>(args: I) -> PathBuf
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR))
}

/// Fills the header and tab bar, then opens the home tab.
pub fn configure_startup(
    app: &crate::AppWindow,
    app_state: &AppState,
    display: &ImageDisplay,
) -> Result<()> {
    let schedule = &app_state.schedule;
    let view_state = app.global::<crate::ViewState>();

    view_state.set_site_title(schedule.site_title.as_str().into());
    let tabs: Vec<SharedString> = app_state
        .tabs
        .borrow()
        .labels()
        .iter()
        .map(|label| label.as_str().into())
        .collect();
    view_state.set_tabs(ModelRc::new(VecModel::from(tabs)));

    log::info!(
        "Serving assets from {}",
        app_state.config.asset_root.display()
    );
    if !app_state.config.asset_root.is_dir() {
        log::warn!(
            "Asset directory {} does not exist; images will show placeholders",
            app_state.config.asset_root.display()
        );
    }

    display.show(&schedule.left_logo, ImageTarget::Logo(LogoSide::Left));
    display.show(&schedule.right_logo, ImageTarget::Logo(LogoSide::Right));

    crate::ui::page_view::show_tab(app, app_state, display, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn first_positional_argument_wins() {
        assert_eq!(
            asset_root_from_args(args(&["week", "--verbose", "/srv/site", "other"])),
            PathBuf::from("/srv/site")
        );
    }

    #[test]
    fn falls_back_to_public() {
        assert_eq!(
            asset_root_from_args(args(&["week"])),
            PathBuf::from(DEFAULT_ASSET_DIR)
        );
        assert_eq!(
            asset_root_from_args(args(&["week", "-v"])),
            PathBuf::from(DEFAULT_ASSET_DIR)
        );
    }
}
