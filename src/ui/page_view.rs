//! Builds the Slint models for the selected tab and mounts its carousels.

use crate::content::{Day, EventRecord, ExternalLink, Greeting, HomePage, Media, Page};
use crate::error::Result;
use crate::services::{SlideChange, SlideObserver};
use crate::state::AppState;
use crate::ui::image_display::{ImageDisplay, ImageTarget};
use crate::ui::state_helpers::{clear_error, set_page_info};
use log::info;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::rc::Rc;

fn link_item(link: &ExternalLink) -> crate::LinkItem {
    crate::LinkItem {
        label: link.label().into(),
        url: link.url().as_str().into(),
        youtube: matches!(link, ExternalLink::YouTube(_)),
    }
}

/// Model row for one event; the image itself is filled in once decoded.
pub fn build_event_card(day: &Day, row: usize, event: &EventRecord) -> crate::EventCard {
    let slide_count = match &event.media {
        Media::Carousel(images) => images.len(),
        Media::Single(_) => 1,
    };
    let links: Vec<crate::LinkItem> = event.links.iter().map(link_item).collect();

    crate::EventCard {
        id: event.id as i32,
        badge: format!("{} • Evento {}", day.name, row + 1).into(),
        title: event.title.as_str().into(),
        description: event.description.as_str().into(),
        image: slint::Image::default(),
        image_visible: false,
        image_error: false,
        is_carousel: matches!(event.media, Media::Carousel(_)),
        slide_index: 0,
        slide_count: slide_count as i32,
        links: ModelRc::new(VecModel::from(links)),
        reversed: row % 2 == 1,
    }
}

/// Model row for one greeting panel.
pub fn build_greeting(greeting: &Greeting) -> crate::Greeting {
    let paragraphs: Vec<SharedString> = greeting
        .paragraphs
        .iter()
        .map(|paragraph| paragraph.as_str().into())
        .collect();

    crate::Greeting {
        heading: greeting.heading.as_str().into(),
        portrait: slint::Image::default(),
        portrait_visible: false,
        paragraphs: ModelRc::new(VecModel::from(paragraphs)),
        signatory: greeting.signatory.as_str().into(),
        role: greeting.role.as_str().into(),
    }
}

/// Switches the page to `tab`, tearing down the previous page's carousels.
pub fn show_tab(
    ui: &crate::AppWindow,
    state: &AppState,
    display: &ImageDisplay,
    tab: usize,
) -> Result<()> {
    let page = state.schedule.page(tab)?;
    state.tabs.borrow_mut().select(tab)?;
    clear_error(ui);

    match page {
        Page::Home(home) => show_home(ui, state, display, tab, home),
        Page::Day(day) => show_day(ui, state, display, tab, day),
    }
    Ok(())
}

fn show_home(
    ui: &crate::AppWindow,
    state: &AppState,
    display: &ImageDisplay,
    tab: usize,
    home: &HomePage,
) {
    let generation = state.carousels.borrow_mut().mount_page(&[], None);
    set_page_info(ui, tab, true, generation);

    let view_state = ui.global::<crate::ViewState>();
    let greetings: Vec<crate::Greeting> = home.greetings.iter().map(build_greeting).collect();
    view_state.set_greetings(ModelRc::new(VecModel::from(greetings)));
    view_state.set_about_title(home.about.title.as_str().into());
    view_state.set_about_body(home.about.body.as_str().into());
    view_state.set_events(ModelRc::default());

    for (row, greeting) in home.greetings.iter().enumerate() {
        display.show(
            &greeting.portrait,
            ImageTarget::Portrait { generation, row },
        );
    }
    info!("Showing home page (generation {})", generation);
}

fn show_day(
    ui: &crate::AppWindow,
    state: &AppState,
    display: &ImageDisplay,
    tab: usize,
    day: &Day,
) {
    let observer: SlideObserver = {
        let display = display.clone();
        Rc::new(move |change: SlideChange| display.change_slide(change))
    };
    let generation = state
        .carousels
        .borrow_mut()
        .mount_page(&day.events, Some(observer));
    set_page_info(ui, tab, false, generation);

    let view_state = ui.global::<crate::ViewState>();
    let cards: Vec<crate::EventCard> = day
        .events
        .iter()
        .enumerate()
        .map(|(row, event)| build_event_card(day, row, event))
        .collect();
    view_state.set_day_title(day.name.as_str().into());
    view_state.set_day_subtitle(state.schedule.day_subtitle.as_str().into());
    view_state.set_events(ModelRc::new(VecModel::from(cards)));
    view_state.set_greetings(ModelRc::default());

    for (row, event) in day.events.iter().enumerate() {
        match &event.media {
            Media::Single(image) => {
                display.show(image, ImageTarget::EventImage { generation, row });
            }
            Media::Carousel(_) => {
                let current = state.carousels.borrow().current(row);
                if let Some(change) = current {
                    display.preload(&change.neighbours);
                    let image = change.image.clone();
                    display.show(&image, ImageTarget::Slide(change));
                }
            }
        }
    }
    info!(
        "Showing {} with {} event(s) (generation {})",
        day.name,
        day.events.len(),
        generation
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Schedule;
    use slint::Model;

    #[test]
    fn cards_alternate_sides_and_number_events() {
        let schedule = Schedule::engineering_week_2025().unwrap();
        let monday = &schedule.days[0];

        let first = build_event_card(monday, 0, &monday.events[0]);
        assert_eq!(first.badge.as_str(), "Lunes • Evento 1");
        assert!(!first.reversed);
        assert!(first.is_carousel);
        assert_eq!(first.slide_count, 4);
        assert_eq!(first.links.row_count(), 2);
        let youtube = first.links.row_data(1).unwrap();
        assert!(youtube.youtube);
        assert_eq!(youtube.label.as_str(), "Ver en YouTube");

        let second = build_event_card(monday, 1, &monday.events[2]);
        assert!(second.reversed);
        assert!(!second.is_carousel);
        assert_eq!(second.links.row_count(), 0);
    }

    #[test]
    fn greeting_keeps_paragraph_order() {
        let schedule = Schedule::engineering_week_2025().unwrap();
        let greeting = build_greeting(&schedule.home.greetings[0]);
        assert_eq!(greeting.paragraphs.row_count(), 2);
        assert!(
            greeting
                .paragraphs
                .row_data(0)
                .unwrap()
                .starts_with("El Decano")
        );
        assert!(!greeting.portrait_visible);
    }
}
