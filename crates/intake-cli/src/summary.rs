use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use intake_cli::types::{FieldRules, ProcessResult};
use intake_model::FieldRule;

pub fn print_process_summary(result: &ProcessResult) {
    println!("Form: {}", result.form);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Status"),
        header_cell("Messages"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for field in &result.report.fields {
        let status = if field.is_valid() {
            Cell::new("\u{2713}")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("\u{2717}")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        };
        let messages = if field.errors.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(field.errors.join("; ")).fg(Color::Red)
        };
        table.add_row(vec![Cell::new(&field.field), status, messages]);
    }
    println!("{table}");

    if result.gate.block_submission {
        println!();
        println!(
            "Submission blocked: {} invalid field(s), starting at {}",
            result.report.invalid_count(),
            result
                .gate
                .first_invalid_field
                .as_deref()
                .unwrap_or("unknown")
        );
        return;
    }

    if let Some(scores) = &result.scores {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Domain"),
            header_cell("Items 2-3"),
            header_cell("Raw"),
            header_cell("Significant"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Center);
        for (domain, score) in [
            ("Inattention", &scores.inattention),
            ("Hyperactivity/Impulsivity", &scores.hyperactivity),
        ] {
            let significant = if score.clinically_significant {
                Cell::new("YES").fg(Color::Red).add_attribute(Attribute::Bold)
            } else {
                dim_cell("no")
            };
            table.add_row(vec![
                Cell::new(domain),
                Cell::new(format!("{}/9", score.symptom_count)),
                Cell::new(score.raw_score),
                significant,
            ]);
        }
        println!();
        println!("{table}");
        println!("Interpretation: {}", scores.interpretation);
    }

    if let Some(path) = &result.outputs.assessment_xml {
        println!("Assessment XML: {}", path.display());
    }
    if let Some(path) = &result.outputs.summary {
        println!("Summary: {}", path.display());
    }
    if let Some(notification) = &result.notification {
        println!("Notification subject: {}", notification.subject);
    }
}

pub fn print_rules(fields: &[FieldRules]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Rules")]);
    apply_table_style(&mut table);
    for field in fields {
        let rules = if field.rules.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(
                field
                    .rules
                    .iter()
                    .map(describe_rule)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };
        table.add_row(vec![Cell::new(&field.field), rules]);
    }
    println!("{table}");
}

fn describe_rule(rule: &FieldRule) -> String {
    match rule {
        FieldRule::Required => "required".to_string(),
        FieldRule::MinimumLength(min) => format!("min length {min}"),
        FieldRule::MaximumLength(max) => format!("max length {max}"),
        FieldRule::PatternSet(classes) => format!("patterns [{}]", classes.join(", ")),
        FieldRule::Unknown(token) => format!("unknown ({token})"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
