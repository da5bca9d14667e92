//! Main render/view function (View in TEA pattern)
//!
//! Turns the planned page shape into widgets. Precedence on screen:
//! menu rail, route content, loading overlay, offline banner on top.

use parley_app::{plan, AppState, PageView, ViewPlan};
use parley_core::ErrorPage;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::layout;
use crate::theme::{design_tokens, styles, Palette};

/// Braille spinner frames for the loading indicator
const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; all display decisions come from
/// `plan()` so they stay testable without a terminal.
pub fn view(frame: &mut Frame, state: &AppState) {
    let view_plan = plan(state);
    let tokens = design_tokens(state.theme.mode());
    let area = frame.area();

    // Fill the terminal with the mode's background color
    let bg_block = Block::default().style(Style::default().bg(tokens.background));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, view_plan.menu);

    if let Some(menu_area) = areas.menu {
        render_menu(frame, menu_area, tokens, &view_plan);
    }

    render_content(frame, areas.content, tokens, state, &view_plan);
    render_status_bar(frame, areas.status, tokens, state, &view_plan);

    if view_plan.loading {
        render_loading(frame, areas.content, tokens, state.animation_frame);
    }

    // Offline banner overlays everything else but replaces nothing
    if let Some(banner) = &view_plan.banner {
        render_banner(frame, areas.content, tokens, banner);
    }
}

fn render_menu(frame: &mut Frame, area: Rect, tokens: &Palette, view_plan: &ViewPlan) {
    let entries = [
        ("h", "Home", matches!(view_plan.content, PageView::Chat { chat_id: None })),
        ("c", "Chat", matches!(view_plan.content, PageView::Chat { chat_id: Some(_) })),
        ("t", "Theme", false),
        ("r", "Refresh", false),
        ("q", "Quit", false),
    ];

    let items: Vec<ListItem> = entries
        .iter()
        .map(|(key, label, active)| {
            let style = if *active {
                styles::accent_bold(tokens)
            } else {
                styles::text_primary(tokens)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {key} "), styles::accent(tokens)),
                Span::styled(*label, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        styles::panel_block(tokens)
            .title(Span::styled(" Parley ", styles::accent_bold(tokens))),
    );
    frame.render_widget(list, area);
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    tokens: &Palette,
    state: &AppState,
    view_plan: &ViewPlan,
) {
    match &view_plan.content {
        PageView::Chat { chat_id } => render_chat(frame, area, tokens, state, chat_id.as_deref()),
        PageView::Login { auth } => {
            let hint = if *auth {
                "Finishing sign-in..."
            } else {
                "Sign in to continue."
            };
            render_form_page(frame, area, tokens, "Login", hint);
        }
        PageView::Signup { pending_id } => {
            let hint = if pending_id.is_some() {
                "Confirm your account to finish signing up."
            } else {
                "Create an account."
            };
            render_form_page(frame, area, tokens, "Sign up", hint);
        }
        PageView::Forgot { reset } => {
            let hint = if reset.is_some() {
                "Choose a new password."
            } else {
                "Request a password reset link."
            };
            render_form_page(frame, area, tokens, "Forgot password", hint);
        }
        PageView::Error(page) => render_error_page(frame, area, tokens, page),
    }
}

fn render_chat(
    frame: &mut Frame,
    area: Rect,
    tokens: &Palette,
    state: &AppState,
    chat_id: Option<&str>,
) {
    let title = match chat_id {
        Some(id) => format!(" Chat {id} "),
        None => " Chat ".to_string(),
    };
    let block = styles::panel_block(tokens).title(Span::styled(title, styles::accent_bold(tokens)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if state.registry.is_refreshing() {
        lines.push(Line::styled("Refreshing documents...", styles::text_secondary(tokens)));
    }
    if state.registry.documents().is_empty() {
        lines.push(Line::styled("No documents.", styles::text_secondary(tokens)));
    } else {
        lines.push(Line::styled("Documents:", styles::text_primary(tokens)));
        for doc in state.registry.documents() {
            lines.push(Line::from(vec![
                Span::styled("  - ", styles::text_secondary(tokens)),
                Span::styled(doc.display_name().to_string(), styles::text_primary(tokens)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_form_page(frame: &mut Frame, area: Rect, tokens: &Palette, title: &str, hint: &str) {
    let block = styles::panel_block(tokens)
        .title(Span::styled(format!(" {title} "), styles::accent_bold(tokens)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::styled(hint, styles::text_primary(tokens))).wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_error_page(frame: &mut Frame, area: Rect, tokens: &Palette, page: &ErrorPage) {
    let block = styles::panel_block(tokens);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let box_area = layout::centered(inner, 50, 4);
    let lines = vec![
        Line::styled(page.status.to_string(), styles::error(tokens)).alignment(Alignment::Center),
        Line::styled(page.content.clone(), styles::text_primary(tokens))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), box_area);
}

fn render_loading(frame: &mut Frame, area: Rect, tokens: &Palette, animation_frame: u64) {
    let spinner = SPINNER[(animation_frame as usize) % SPINNER.len()];
    let box_area = layout::centered(area, 24, 3);

    frame.render_widget(Clear, box_area);
    let block = styles::panel_block(tokens);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(spinner, styles::accent(tokens)),
            Span::styled(" Loading...", styles::text_primary(tokens)),
        ]))
        .alignment(Alignment::Center),
        inner,
    );
}

fn render_banner(frame: &mut Frame, area: Rect, tokens: &Palette, banner: &ErrorPage) {
    let box_area = layout::centered(area, 48, 5);

    frame.render_widget(Clear, box_area);
    let block = styles::banner_block(tokens)
        .title(Span::styled(format!(" {} ", banner.status), styles::error(tokens)));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    frame.render_widget(
        Paragraph::new(Line::styled(banner.content.clone(), styles::text_primary(tokens)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    tokens: &Palette,
    state: &AppState,
    view_plan: &ViewPlan,
) {
    let mut spans = vec![
        Span::styled(format!(" {} ", state.location), styles::accent(tokens)),
        Span::styled(format!("theme:{} ", view_plan.theme_class), styles::text_secondary(tokens)),
    ];
    if state.is_offline() {
        spans.push(Span::styled("offline ", styles::error(tokens)));
    }
    if let Some(target) = view_plan.redirected_to {
        spans.push(Span::styled(
            format!("redirected to {target} "),
            styles::text_secondary(tokens),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
