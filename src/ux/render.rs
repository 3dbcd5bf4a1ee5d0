use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use compte_api::compte::TypeCompte;

use super::{card::card_lines, dialog::AccountDialog, screen::Screen};

const TITLE: &str = "Liste des Comptes";

pub fn draw(frame: &mut Frame, screen: &mut Screen) {
    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    draw_list(frame, list_area, screen);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            " + ".black().on_cyan().bold(),
            Span::raw(" ajouter   ↑/↓ choisir   e modifier   d supprimer   r actualiser   q quitter"),
        ])),
        footer_area,
    );

    if let Some(dialog) = screen.dialog() {
        draw_dialog(frame, frame.area(), dialog);
    }
}

fn draw_list(frame: &mut Frame, area: Rect, screen: &mut Screen) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(TITLE).bold());

    let items: Vec<ListItem> = screen
        .comptes()
        .iter()
        .map(|compte| {
            let mut lines: Vec<Line> = card_lines(compte).into_iter().map(Line::from).collect();
            lines.push(Line::from(vec![
                "[d] Supprimer".red(),
                Span::raw("  "),
                "[e] Modifier".blue(),
            ]));
            lines.push(Line::default());
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▌ ");

    frame.render_stateful_widget(list, area, screen.list_state_mut());
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &AccountDialog) {
    let area = centered(area, 46, 11);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(dialog.title()).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [solde_area, kind_area, buttons_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let border = if dialog.is_valid() || dialog.solde_text().is_empty() {
        Style::default()
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(format!("{}▏", dialog.solde_text())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Solde"),
        ),
        solde_area,
    );

    frame.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from("Type de compte:"),
            Line::from(vec![
                radio(dialog.kind() == TypeCompte::Courant),
                Span::raw(TypeCompte::Courant.label()),
                Span::raw("    "),
                radio(dialog.kind() == TypeCompte::Epargne),
                Span::raw(TypeCompte::Epargne.label()),
            ]),
        ])),
        kind_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(format!(" Entrée: {} ", dialog.confirm_label()))
                .black()
                .on_green(),
            Span::raw("  "),
            " Échap: Annuler ".black().on_gray(),
        ])),
        buttons_area,
    );
}

fn radio(selected: bool) -> Span<'static> {
    if selected {
        "(•) ".bold()
    } else {
        Span::raw("( ) ")
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::services::comptes::fake::compte;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn rendered(screen: &mut Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, screen)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_cards() {
        let mut screen = Screen::default();
        screen.replace_comptes(vec![compte(1, 250.5, TypeCompte::Epargne)]);

        let text = rendered(&mut screen);
        assert!(text.contains("Liste des Comptes"));
        assert!(text.contains("Solde: 250.5"));
        assert!(text.contains("Type: EPARGNE"));
        assert!(text.contains("Date de création: 2024-11-05"));
        assert!(text.contains("[d] Supprimer"));
    }

    #[test]
    fn test_draws_dialog() {
        let mut screen = Screen::default();
        screen.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        let text = rendered(&mut screen);
        assert!(text.contains("Ajouter un compte"));
        assert!(text.contains("Type de compte:"));
        assert!(text.contains("Courant"));
    }
}
