use crate::report::TableRow;

/// Lay rows out in aligned columns under a header and a rule.
#[must_use]
pub fn render<T: TableRow>(rows: &[T]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = T::HEADERS.iter().map(|h| (*h).to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();

    let mut out = String::new();
    out.push_str(&format_line(&headers, &widths, &[]));
    out.push_str(&format_line(&rule, &widths, &[]));
    for row in &cells {
        out.push_str(&format_line(row, &widths, T::RIGHT_ALIGNED));
    }
    out
}

fn format_line(values: &[String], widths: &[usize], right_aligned: &[usize]) -> String {
    let line = values
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (value, &width))| {
            if right_aligned.contains(&i) {
                format!("{value:>width$}")
            } else {
                format!("{value:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

/// Print rows as a table, or `empty_message` when there are none
pub fn print_table<T: TableRow>(rows: &[T], empty_message: &str) {
    if rows.is_empty() {
        println!("{empty_message}");
        return;
    }
    println!();
    print!("{}", render(rows));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{to_department_table, to_role_table};
    use crate::types::{Department, RoleListing};

    #[test]
    fn test_render_departments() {
        let rows = to_department_table(&[
            Department {
                id: 1,
                name: "Engineering".to_string(),
            },
            Department {
                id: 12,
                name: "Sales".to_string(),
            },
        ]);

        let expected = "\
Department_ID  Department_Name
─────────────  ───────────────
1              Engineering
12             Sales
";
        assert_eq!(render(&rows), expected);
    }

    #[test]
    fn test_render_right_aligns_salary() {
        let rows = to_role_table(&[
            RoleListing {
                id: 1,
                title: "Engineer".to_string(),
                salary: 90000.0,
                department_name: Some("Engineering".to_string()),
            },
            RoleListing {
                id: 2,
                title: "Lead".to_string(),
                salary: 1250000.0,
                department_name: None,
            },
        ]);

        let rendered = render(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with("   $90,000.00"));
        assert!(lines[3].ends_with("$1,250,000.00"));
        assert!(lines[3].contains("Unassigned"));
    }

    #[test]
    fn test_render_empty_has_header_only() {
        let rendered = render::<crate::report::DepartmentTableRow>(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }
}
