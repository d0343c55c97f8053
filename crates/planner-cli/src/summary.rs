use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use planner_cli::types::CheckResult;
use planner_select::{PlanSummary, Statistics, TeacherAssignmentSummary};

pub fn print_check(result: &CheckResult) {
    println!("Plan: {}", result.plan_file.display());
    if result.findings.is_empty() {
        println!("All entities pass validation.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Kind"),
            header_cell("Id"),
            header_cell("Name"),
            header_cell("Severity"),
            header_cell("Message"),
        ]);
        apply_findings_table_style(&mut table);
        align_column(&mut table, 3, CellAlignment::Center);
        for finding in &result.findings {
            for message in &finding.report.errors {
                table.add_row(vec![
                    Cell::new(finding.kind),
                    Cell::new(&finding.id),
                    Cell::new(&finding.name),
                    severity_cell(true),
                    Cell::new(message),
                ]);
            }
            for message in &finding.report.warnings {
                table.add_row(vec![
                    Cell::new(finding.kind),
                    Cell::new(&finding.id),
                    Cell::new(&finding.name),
                    severity_cell(false),
                    Cell::new(message),
                ]);
            }
        }
        println!("{table}");
    }

    if !result.completeness.warnings.is_empty() {
        println!();
        println!("Plan health:");
        for warning in &result.completeness.warnings {
            println!("- {warning}");
        }
    }

    let errors: usize = result.findings.iter().map(|f| f.report.error_count()).sum();
    let warnings: usize = result
        .findings
        .iter()
        .map(|f| f.report.warning_count())
        .sum();
    println!();
    println!(
        "{errors} error(s), {} warning(s)",
        warnings + result.completeness.warning_count()
    );
}

pub fn print_stats(stats: &Statistics) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Teacher"),
        header_cell("Load"),
        header_cell("Max"),
        header_cell("Used"),
    ]);
    apply_stats_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for line in &stats.teacher_load {
        table.add_row(vec![
            Cell::new(&line.name),
            Cell::new(line.current_load),
            Cell::new(line.max_load),
            percentage_cell(line.percentage),
        ]);
    }
    println!("Teacher workload:");
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Code"),
        header_cell("Hours"),
        header_cell("Coverage"),
    ]);
    apply_stats_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for line in &stats.subject_coverage {
        table.add_row(vec![
            Cell::new(&line.name),
            Cell::new(&line.code),
            Cell::new(line.assigned_hours),
            coverage_cell(line.percentage),
        ]);
    }
    println!();
    println!("Subject coverage:");
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![header_cell("Classroom"), header_cell("Coverage")]);
    apply_stats_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for line in &stats.classroom_coverage {
        table.add_row(vec![Cell::new(&line.name), coverage_cell(line.percentage)]);
    }
    println!();
    println!("Classroom coverage:");
    println!("{table}");

    println!();
    println!(
        "Totals: {} teachers, {} subjects, {} classrooms, {} assignments ({} active)",
        stats.totals.teachers,
        stats.totals.subjects,
        stats.totals.classrooms,
        stats.totals.assignments,
        stats.totals.active_assignments,
    );
}

pub fn print_plan_summary(summary: &PlanSummary) {
    println!("Academic year: {}", summary.academic_year);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_stats_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Teachers"), Cell::new(summary.totals.teachers)]);
    table.add_row(vec![Cell::new("Subjects"), Cell::new(summary.totals.subjects)]);
    table.add_row(vec![
        Cell::new("Classrooms"),
        Cell::new(summary.totals.classrooms),
    ]);
    table.add_row(vec![
        Cell::new("Assignments"),
        Cell::new(summary.totals.assignments),
    ]);
    table.add_row(vec![
        Cell::new("Active assignments"),
        Cell::new(summary.totals.active_assignments),
    ]);
    table.add_row(vec![
        Cell::new("Unassigned subjects"),
        gap_cell(summary.unassigned_subjects),
    ]);
    table.add_row(vec![
        Cell::new("Underloaded teachers"),
        gap_cell(summary.underloaded_teachers),
    ]);
    table.add_row(vec![
        Cell::new("Incomplete classrooms"),
        gap_cell(summary.incomplete_classrooms),
    ]);
    println!("{table}");
}

pub fn print_teacher_summary(summary: &TeacherAssignmentSummary) {
    println!(
        "{} ({}): {}/{} weekly hours",
        summary.teacher_name, summary.teacher_id, summary.total_hours, summary.max_load
    );
    if summary.lines.is_empty() {
        println!("No counting assignments.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Classroom"),
        header_cell("Hours"),
        header_cell("Semester"),
    ]);
    apply_stats_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for line in &summary.lines {
        table.add_row(vec![
            Cell::new(&line.subject),
            Cell::new(&line.classroom),
            Cell::new(line.hours_per_week),
            Cell::new(&line.semester),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(summary.total_hours).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn apply_stats_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(is_error: bool) -> Cell {
    if is_error {
        Cell::new("error")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("warning").fg(Color::Yellow)
    }
}

fn percentage_cell(value: f64) -> Cell {
    let cell = Cell::new(format!("{value:.2}%"));
    if value >= 100.0 {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else if value >= 90.0 {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

fn coverage_cell(value: f64) -> Cell {
    let cell = Cell::new(format!("{value:.2}%"));
    if value >= 100.0 {
        cell.fg(Color::Green)
    } else if value < 50.0 {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Yellow)
    }
}

fn gap_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
