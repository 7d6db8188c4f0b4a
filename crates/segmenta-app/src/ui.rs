//! The demo screen.

use egui::{Color32, Context, Frame, Margin, RichText};
use segmenta_core::{BadgeSet, BorderPlacement, ConfigError, OptionSet, SelectionModel};
use segmenta_widgets::{PickerStyle, SegmentedPicker, SegmentedTabBar, TabBarStyle, theme};

/// Tabs of the demo picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabType {
    Normal,
    LimitedTime,
    Completed,
}

impl TabType {
    pub const ALL: [TabType; 3] = [TabType::Normal, TabType::LimitedTime, TabType::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TabType::Normal => "Regular",
            TabType::LimitedTime => "Limited time",
            TabType::Completed => "Completed",
        }
    }
}

/// A list long enough to need scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Announcements,
    Events,
    Rewards,
    Friends,
    Rankings,
    Shop,
    Settings,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Announcements,
        Category::Events,
        Category::Rewards,
        Category::Friends,
        Category::Rankings,
        Category::Shop,
        Category::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Announcements => "Announcements",
            Category::Events => "Events",
            Category::Rewards => "Rewards",
            Category::Friends => "Friends",
            Category::Rankings => "Rankings",
            Category::Shop => "Shop",
            Category::Settings => "Settings",
        }
    }
}

/// State owned by the demo screen.
#[derive(Debug)]
pub struct DemoState {
    pub selected_tab: SelectionModel<TabType>,
    pub items: OptionSet<TabType>,
    pub badge_case: BadgeSet<TabType>,
    pub category: SelectionModel<Category>,
    pub categories: OptionSet<Category>,
    pub category_badges: BadgeSet<Category>,
}

impl DemoState {
    pub fn new() -> Result<Self, ConfigError> {
        let mut selected_tab = SelectionModel::new(TabType::Normal);
        selected_tab.subscribe(|change| {
            log::info!("Selected tab: {:?} -> {:?}", change.previous, change.current);
        });

        let mut category = SelectionModel::new(Category::Announcements);
        category.subscribe(|change| {
            if change.is_noop() {
                log::info!("Category {:?} selected again", change.current);
            } else {
                log::info!("Category: {:?} -> {:?}", change.previous, change.current);
            }
        });

        Ok(Self {
            selected_tab,
            items: OptionSet::new(TabType::ALL.to_vec())?,
            badge_case: BadgeSet::new(vec![TabType::Normal, TabType::Completed]),
            category,
            categories: OptionSet::new(Category::ALL.to_vec())?,
            category_badges: BadgeSet::new(vec![Category::Announcements, Category::Events]),
        })
    }
}

fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::SYSTEM_GRAY));
}

/// Render the demo screen.
pub fn render_ui(ctx: &Context, demo: &mut DemoState) {
    egui::CentralPanel::default()
        .frame(Frame::new().fill(Color32::WHITE).inner_margin(Margin::same(12)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);

                let width = ui.available_width() * 0.95;
                SegmentedPicker::new("tab-picker", &mut demo.selected_tab, &demo.items, TabType::label)
                    .badges(&demo.badge_case)
                    .width(width)
                    .style(PickerStyle::colored(Color32::WHITE, theme::CYAN, Color32::RED))
                    .show(ui);

                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Selected Tab: {}", demo.selected_tab.get().label()))
                        .size(22.0),
                );
                ui.add_space(24.0);
            });

            section_label(ui, "FIXED TAB BAR");
            let reference_width = ui.available_width();
            SegmentedTabBar::new("tab-bar", &mut demo.selected_tab, &demo.items, TabType::label)
                .badges(&demo.badge_case)
                .fixed(reference_width)
                .border(BorderPlacement::Bottom)
                .show(ui);

            ui.add_space(24.0);
            section_label(ui, "SCROLLING TAB BAR");
            SegmentedTabBar::new("category-bar", &mut demo.category, &demo.categories, Category::label)
                .badges(&demo.category_badges)
                .style(TabBarStyle::colored(theme::SYSTEM_GRAY5, theme::TINT, Color32::RED))
                .border(BorderPlacement::Top)
                .show(ui);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("First").clicked() {
                    demo.category.set(Category::ALL[0]);
                }
                if ui.button("Last").clicked() {
                    demo.category.set(Category::ALL[Category::ALL.len() - 1]);
                }
                if ui.button("Reselect").clicked() {
                    let current = *demo.category.get();
                    demo.category.set(current);
                }
            });
            ui.label(format!("Category: {}", demo.category.get().label()));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, RawInput, Rect, vec2};

    #[test]
    fn test_demo_state_defaults() {
        let demo = DemoState::new().unwrap();
        assert_eq!(demo.selected_tab.get(), &TabType::Normal);
        assert_eq!(demo.items.len(), 3);
        assert!(demo.badge_case.contains(&TabType::Completed));
        assert!(!demo.badge_case.contains(&TabType::LimitedTime));
        assert_eq!(demo.selected_tab.observer_count(), 1);
        assert_eq!(demo.categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<&str> = TabType::ALL.iter().map(TabType::label).collect();
        assert_eq!(labels, vec!["Regular", "Limited time", "Completed"]);
    }

    #[test]
    fn test_render_frame_keeps_selection() {
        let ctx = Context::default();
        let mut demo = DemoState::new().unwrap();
        for time in [0.0, 0.1] {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(480.0, 720.0))),
                time: Some(time),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| render_ui(ctx, &mut demo));
        }
        assert_eq!(demo.selected_tab.get(), &TabType::Normal);
        assert_eq!(demo.selected_tab.generation(), 0);
    }
}
