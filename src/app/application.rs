//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, AnyView, Bounds, KeyBinding, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::config::LoadedConfig;

actions!(gallery, [Quit]);

/// Run the Component Gallery application
pub fn run_app(loaded: LoadedConfig) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let config = &loaded.config;
        let entities = AppEntities::init(config.log_capacity, cx);

        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window_width), px(config.window_height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Component Gallery")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(entities.clone(), &loaded, cx));
            cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
        });

        if let Err(e) = opened {
            tracing::error!(error = %e, "failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
