//! Form drawing
//!
//! Full redraw per event, queued through crossterm and flushed once. A
//! nine-field form does not need diffed buffers.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use jobform_core::{Field, visible_fields};

use crate::app::FormApp;
use crate::widgets::CheckboxGroup;

const LABEL_WIDTH: usize = 26;
const VALUE_COL: u16 = (LABEL_WIDTH + 4) as u16;

/// Draw the whole form (or the summary overlay) into `out`.
pub fn draw(app: &FormApp, out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    if let Some(summary) = app.overlay() {
        draw_overlay(summary, out)?;
        out.flush()?;
        return Ok(());
    }

    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("Job Application Form"),
        SetAttribute(Attribute::Reset),
        cursor::MoveTo(0, 1),
        SetForegroundColor(Color::DarkGrey),
        Print("Tab next field   Space toggle/select   Enter submit   Ctrl+R reset   Esc quit"),
        ResetColor
    )?;

    let mut row: u16 = 3;
    let mut cursor_target: Option<(u16, u16)> = None;

    for field in visible_fields(app.form().draft().position) {
        match field {
            Field::ApplyingForPosition => row = draw_position_row(app, row, out)?,
            Field::AdditionalSkills => row = draw_skills_rows(app, row, out)?,
            _ => row = draw_text_row(app, field, row, &mut cursor_target, out)?,
        }
    }

    // Park the terminal cursor inside the focused text input.
    if let Some((col, line)) = cursor_target {
        queue!(out, cursor::MoveTo(col, line), cursor::Show)?;
    }

    out.flush()
}

fn focus_marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}

fn draw_label(label: &str, focused: bool, row: u16, out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, row), Print(focus_marker(focused)))?;
    if focused {
        queue!(out, SetAttribute(Attribute::Bold))?;
    } else {
        queue!(out, SetForegroundColor(Color::DarkGrey))?;
    }
    queue!(
        out,
        Print(format!("{:<width$}", label, width = LABEL_WIDTH)),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;
    Ok(())
}

fn draw_error(message: Option<&str>, row: u16, out: &mut impl Write) -> io::Result<u16> {
    let Some(message) = message else {
        return Ok(row);
    };
    queue!(
        out,
        cursor::MoveTo(VALUE_COL, row),
        SetForegroundColor(Color::Red),
        Print(message),
        ResetColor
    )?;
    Ok(row + 1)
}

fn draw_text_row(
    app: &FormApp,
    field: Field,
    row: u16,
    cursor_target: &mut Option<(u16, u16)>,
    out: &mut impl Write,
) -> io::Result<u16> {
    let Some(input) = app.input(field) else {
        return Ok(row);
    };
    let focused = app.focus() == field;

    draw_label(field.label(), focused, row, out)?;
    queue!(out, cursor::MoveTo(VALUE_COL, row))?;
    if input.is_empty() && !input.placeholder().is_empty() {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(input.placeholder()),
            ResetColor
        )?;
    } else {
        queue!(out, Print(input.value()))?;
    }

    if focused {
        *cursor_target = Some((VALUE_COL + input.cursor_column(), row));
    }

    let next = draw_error(input.error(), row + 1, out)?;
    Ok(next + 1)
}

fn draw_position_row(app: &FormApp, row: u16, out: &mut impl Write) -> io::Result<u16> {
    let select = app.position_select();
    let focused = app.focus() == Field::ApplyingForPosition;

    draw_label(Field::ApplyingForPosition.label(), focused, row, out)?;
    queue!(out, cursor::MoveTo(VALUE_COL, row))?;
    match select.selected_label() {
        Some(label) => queue!(out, Print(format!("< {label} >")))?,
        None => queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("< {} >", select.placeholder())),
            ResetColor
        )?,
    }

    let next = draw_error(select.error(), row + 1, out)?;
    Ok(next + 1)
}

fn draw_skills_rows(app: &FormApp, row: u16, out: &mut impl Write) -> io::Result<u16> {
    let skills = app.skills();
    let focused = app.focus() == Field::AdditionalSkills;

    draw_label(Field::AdditionalSkills.label(), focused, row, out)?;

    let mut line = row;
    for (index, label) in skills.labels().iter().enumerate() {
        let indicator = if skills.is_checked(index) {
            CheckboxGroup::CHECKED_CHAR
        } else {
            CheckboxGroup::UNCHECKED_CHAR
        };
        let on_cursor = focused && skills.cursor() == index;
        queue!(out, cursor::MoveTo(VALUE_COL, line))?;
        if on_cursor {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            Print(format!("{indicator} {label}")),
            SetAttribute(Attribute::Reset)
        )?;
        line += 1;
    }

    let next = draw_error(skills.error(), line, out)?;
    Ok(next + 1)
}

fn draw_overlay(summary: &str, out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("Application submitted"),
        SetAttribute(Attribute::Reset)
    )?;

    let mut row: u16 = 2;
    for line in summary.lines() {
        queue!(out, cursor::MoveTo(2, row), Print(line))?;
        row += 1;
    }

    queue!(
        out,
        cursor::MoveTo(2, row + 1),
        SetForegroundColor(Color::DarkGrey),
        Print("Press any key to continue"),
        ResetColor
    )?;
    Ok(())
}
