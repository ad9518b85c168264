//! Direct-message delivery over Discord.
//!
//! Keyboards become rows of buttons whose custom id is the option token, so
//! a press comes back through the same path as typed text. Long choice lists
//! fall back to dropdowns whose option values carry the same tokens.

use std::sync::Arc;

use async_trait::async_trait;
use eyre::{Result, eyre};
use serenity::builder::{CreateButton, CreateComponents};
use serenity::http::Http;
use serenity::model::application::component::ButtonStyle;
use serenity::model::id;
use timekeeper_core::models::UserId;
use tracing::{debug, warn};

use crate::menu::{Menu, MenuOption, Reply};
use crate::outbound::Outbound;

pub const MAX_ROWS: usize = 5;
pub const MAX_BUTTONS_PER_ROW: usize = 5;
pub const MAX_SELECT_OPTIONS: usize = 25;
const MAX_LABEL_CHARS: usize = 80;
const MAX_CUSTOM_ID_CHARS: usize = 100;
const SELECT_ID_PREFIX: &str = "pick_";

pub struct DiscordOutbound {
    http: Arc<Http>,
}

impl DiscordOutbound {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Outbound for DiscordOutbound {
    async fn send(&self, user_id: UserId, reply: &Reply) -> Result<()> {
        let discord_id =
            u64::try_from(user_id).map_err(|_| eyre!("invalid Discord user id {user_id}"))?;
        let channel = id::UserId(discord_id)
            .create_dm_channel(&*self.http)
            .await?;

        channel
            .send_message(&*self.http, |m| {
                m.content(&reply.text);
                if let Some(menu) = &reply.menu {
                    m.components(|c| build_components(c, menu));
                }
                m
            })
            .await?;

        debug!(user_id, "reply sent");
        Ok(())
    }
}

/// One action row as it will be rendered.
#[derive(Debug, PartialEq, Eq)]
pub enum Row<'a> {
    Buttons(Vec<&'a MenuOption>),
    /// A dropdown; the chosen option's token comes back as the value.
    Select(Vec<&'a MenuOption>),
}

impl Row<'_> {
    pub fn len(&self) -> usize {
        match self {
            Row::Buttons(options) | Row::Select(options) => options.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Arrange keyboard rows within Discord's limits.
///
/// Rows with several options are kept as they are. Runs of single-option
/// rows are packed side by side. Anything past the last allowed row is
/// dropped.
pub fn layout(rows: &[Vec<MenuOption>]) -> Vec<Row<'_>> {
    let mut packed: Vec<Vec<&MenuOption>> = Vec::new();
    let mut packing = false;

    for row in rows.iter().filter(|row| !row.is_empty()) {
        if row.len() == 1 {
            match packed.last_mut() {
                Some(last) if packing && last.len() < MAX_BUTTONS_PER_ROW => last.push(&row[0]),
                _ => packed.push(vec![&row[0]]),
            }
            packing = true;
        } else {
            for chunk in row.chunks(MAX_BUTTONS_PER_ROW) {
                packed.push(chunk.iter().collect());
            }
            packing = false;
        }
    }

    truncated(packed.into_iter().map(Row::Buttons).collect())
}

/// Actions as buttons, then the choices as buttons while they fit in the
/// remaining rows, or as dropdowns of up to [`MAX_SELECT_OPTIONS`] each.
pub fn picker_layout<'a>(actions: &'a [MenuOption], choices: &'a [MenuOption]) -> Vec<Row<'a>> {
    let mut rows: Vec<Row<'a>> = actions
        .chunks(MAX_BUTTONS_PER_ROW)
        .map(|chunk| Row::Buttons(chunk.iter().collect()))
        .collect();
    let free_rows = MAX_ROWS.saturating_sub(rows.len());

    if choices.len() <= free_rows * MAX_BUTTONS_PER_ROW {
        rows.extend(
            choices
                .chunks(MAX_BUTTONS_PER_ROW)
                .map(|chunk| Row::Buttons(chunk.iter().collect())),
        );
    } else {
        rows.extend(
            choices
                .chunks(MAX_SELECT_OPTIONS)
                .map(|chunk| Row::Select(chunk.iter().collect())),
        );
    }
    truncated(rows)
}

fn truncated(mut rows: Vec<Row<'_>>) -> Vec<Row<'_>> {
    if rows.len() > MAX_ROWS {
        let dropped: usize = rows[MAX_ROWS..].iter().map(Row::len).sum();
        warn!(dropped, "menu too large, dropping trailing options");
        rows.truncate(MAX_ROWS);
    }
    rows
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn button<'a>(
    b: &'a mut CreateButton,
    option: &MenuOption,
    style: ButtonStyle,
) -> &'a mut CreateButton {
    b.custom_id(clip(&option.token, MAX_CUSTOM_ID_CHARS))
        .label(clip(&option.label, MAX_LABEL_CHARS))
        .style(style)
}

fn build_rows<'a>(c: &'a mut CreateComponents, rows: Vec<Row<'_>>) -> &'a mut CreateComponents {
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Row::Buttons(options) => c.create_action_row(|r| {
                for option in options {
                    r.create_button(|b| button(b, option, ButtonStyle::Secondary));
                }
                r
            }),
            Row::Select(options) => c.create_action_row(|r| {
                r.create_select_menu(|menu| {
                    menu.custom_id(format!("{SELECT_ID_PREFIX}{index}"))
                        .options(|opts| {
                            for option in options {
                                opts.create_option(|o| {
                                    o.label(clip(&option.label, MAX_LABEL_CHARS))
                                        .value(clip(&option.token, MAX_CUSTOM_ID_CHARS))
                                });
                            }
                            opts
                        })
                })
            }),
        };
    }
    c
}

fn build_components<'a>(c: &'a mut CreateComponents, menu: &Menu) -> &'a mut CreateComponents {
    match menu {
        Menu::Confirm { yes, no } => c.create_action_row(|row| {
            row.create_button(|b| button(b, yes, ButtonStyle::Success))
                .create_button(|b| button(b, no, ButtonStyle::Danger))
        }),
        Menu::Keyboard(rows) => build_rows(c, layout(rows)),
        Menu::Picker { actions, choices } => build_rows(c, picker_layout(actions, choices)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use timekeeper_core::models::Language;

    use super::*;
    use crate::menu;

    fn option(label: &str) -> MenuOption {
        MenuOption::plain(label)
    }

    fn sizes(rows: &[Row<'_>]) -> Vec<usize> {
        rows.iter().map(Row::len).collect()
    }

    fn working_days(count: u64) -> Vec<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..count).map(|i| first + Days::new(i)).collect()
    }

    #[test]
    fn single_option_rows_are_packed() {
        let mut rows = vec![vec![option("a"), option("b")]];
        rows.extend((0..7).map(|i| vec![option(&i.to_string())]));

        assert_eq!(sizes(&layout(&rows)), vec![2, 5, 2]);
    }

    #[test]
    fn oversized_menus_are_truncated() {
        let rows: Vec<Vec<MenuOption>> = (0..40).map(|i| vec![option(&i.to_string())]).collect();

        let packed = layout(&rows);
        assert_eq!(packed.len(), MAX_ROWS);
        assert!(packed.iter().all(|row| row.len() == MAX_BUTTONS_PER_ROW));
        assert_eq!(packed[0], Row::Buttons((0..5).map(|i| &rows[i][0]).collect()));
    }

    #[test]
    fn short_picker_uses_buttons() {
        let Menu::Picker { actions, choices } = menu::edit_menu(Language::English, &working_days(12))
        else {
            panic!("edit menu should be a picker");
        };

        let rows = picker_layout(&actions, &choices);
        assert_eq!(sizes(&rows), vec![3, 5, 5, 2]);
        assert!(rows.iter().all(|row| matches!(row, Row::Buttons(_))));
    }

    #[test]
    fn full_month_of_dates_stays_reachable() {
        let Menu::Picker { actions, choices } = menu::edit_menu(Language::English, &working_days(31))
        else {
            panic!("edit menu should be a picker");
        };

        let rows = picker_layout(&actions, &choices);
        assert_eq!(sizes(&rows), vec![3, 25, 6]);
        assert!(matches!(rows[1], Row::Select(_)));
        let offered: usize = rows.iter().map(Row::len).sum();
        assert_eq!(offered, actions.len() + choices.len());
    }

    #[test]
    fn clip_counts_characters() {
        assert_eq!(clip("ąęść", 2), "ąę");
    }
}
