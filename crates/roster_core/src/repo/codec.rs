//! Field-prefix text encoding for employee records.
//!
//! # Responsibility
//! - Render a record sequence into the line-oriented roster format.
//! - Parse that format back, in file order.
//!
//! # Invariants
//! - Field lines appear in the order `ID`, `Name`, `Department`, `Salary`.
//! - Lines that carry no known prefix are ignored on decode; the separator
//!   line is only ever written, never interpreted.
//! - Decoding is all-or-nothing: a malformed block rejects the whole input.
//!
//! Format of one record block:
//!
//! ```text
//! ID: 1
//! Name: Ann
//! Department: Eng
//! Salary: 50000.0
//! ----------------------------
//! ```

use crate::model::employee::{Employee, EmployeeId};
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

pub const ID_PREFIX: &str = "ID: ";
pub const NAME_PREFIX: &str = "Name: ";
pub const DEPARTMENT_PREFIX: &str = "Department: ";
pub const SALARY_PREFIX: &str = "Salary: ";
pub const RECORD_SEPARATOR: &str = "----------------------------";

/// Field tag carried by a prefixed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Department,
    Salary,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Department => "Department",
            Self::Salary => "Salary",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Id => ID_PREFIX,
            Self::Name => NAME_PREFIX,
            Self::Department => DEPARTMENT_PREFIX,
            Self::Salary => SALARY_PREFIX,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode/decode failure. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    InvalidId {
        line: usize,
        value: String,
    },
    InvalidSalary {
        line: usize,
        value: String,
    },
    UnexpectedField {
        line: usize,
        found: Field,
        expected: Field,
    },
    /// Input ended inside a block that started at `line`.
    IncompleteRecord {
        line: usize,
    },
    LineBreakInField {
        id: EmployeeId,
        field: Field,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId { line, value } => {
                write!(f, "line {line}: invalid employee id `{value}`")
            }
            Self::InvalidSalary { line, value } => {
                write!(f, "line {line}: invalid salary `{value}`")
            }
            Self::UnexpectedField {
                line,
                found,
                expected,
            } => write!(f, "line {line}: found `{found}` field, expected `{expected}`"),
            Self::IncompleteRecord { line } => {
                write!(f, "record starting at line {line} ends before its `Salary` field")
            }
            Self::LineBreakInField { id, field } => write!(
                f,
                "employee {id}: `{field}` contains a line break and cannot be stored"
            ),
        }
    }
}

impl Error for CodecError {}

/// Renders records into the roster text format, one block per record.
///
/// # Errors
/// - `LineBreakInField` when a text field would split across lines.
pub fn encode_records(employees: &[Employee]) -> Result<String, CodecError> {
    let mut out = String::new();
    for employee in employees {
        for (field, value) in [
            (Field::Name, employee.name.as_str()),
            (Field::Department, employee.department.as_str()),
        ] {
            if value.contains(['\n', '\r']) {
                return Err(CodecError::LineBreakInField {
                    id: employee.id,
                    field,
                });
            }
        }

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{ID_PREFIX}{}", employee.id);
        let _ = writeln!(out, "{NAME_PREFIX}{}", employee.name);
        let _ = writeln!(out, "{DEPARTMENT_PREFIX}{}", employee.department);
        let _ = writeln!(out, "{SALARY_PREFIX}{}", format_salary(employee.salary));
        let _ = writeln!(out, "{RECORD_SEPARATOR}");
    }
    Ok(out)
}

/// Parses roster text into records in file order.
///
/// Empty input decodes to an empty list.
///
/// # Errors
/// - `InvalidId` / `InvalidSalary` when a numeric field does not parse.
/// - `UnexpectedField` when a field line arrives out of order.
/// - `IncompleteRecord` when input ends inside a block.
pub fn decode_records(text: &str) -> Result<Vec<Employee>, CodecError> {
    let mut employees = Vec::new();
    let mut pending = Pending::Idle;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let Some((field, value)) = classify_line(raw) else {
            continue;
        };

        pending = match (pending, field) {
            (Pending::Idle, Field::Id) => Pending::HasId {
                start: line,
                id: parse_id(line, value)?,
            },
            (Pending::HasId { start, id }, Field::Name) => Pending::HasName {
                start,
                id,
                name: value.to_string(),
            },
            (Pending::HasName { start, id, name }, Field::Department) => {
                Pending::HasDepartment {
                    start,
                    id,
                    name,
                    department: value.to_string(),
                }
            }
            (
                Pending::HasDepartment {
                    id,
                    name,
                    department,
                    ..
                },
                Field::Salary,
            ) => {
                let salary = parse_salary(line, value)?;
                employees.push(Employee {
                    id,
                    name,
                    department,
                    salary,
                });
                Pending::Idle
            }
            (state, found) => {
                return Err(CodecError::UnexpectedField {
                    line,
                    found,
                    expected: state.expected(),
                });
            }
        };
    }

    match pending {
        Pending::Idle => Ok(employees),
        Pending::HasId { start, .. }
        | Pending::HasName { start, .. }
        | Pending::HasDepartment { start, .. } => {
            Err(CodecError::IncompleteRecord { line: start })
        }
    }
}

/// Partially assembled block; `start` is the line of its `ID` field.
enum Pending {
    Idle,
    HasId {
        start: usize,
        id: EmployeeId,
    },
    HasName {
        start: usize,
        id: EmployeeId,
        name: String,
    },
    HasDepartment {
        start: usize,
        id: EmployeeId,
        name: String,
        department: String,
    },
}

impl Pending {
    fn expected(&self) -> Field {
        match self {
            Self::Idle => Field::Id,
            Self::HasId { .. } => Field::Name,
            Self::HasName { .. } => Field::Department,
            Self::HasDepartment { .. } => Field::Salary,
        }
    }
}

fn classify_line(line: &str) -> Option<(Field, &str)> {
    [Field::Id, Field::Name, Field::Department, Field::Salary]
        .into_iter()
        .find_map(|field| line.strip_prefix(field.prefix()).map(|value| (field, value)))
}

fn parse_id(line: usize, value: &str) -> Result<EmployeeId, CodecError> {
    value.parse().map_err(|_| CodecError::InvalidId {
        line,
        value: value.to_string(),
    })
}

fn parse_salary(line: usize, value: &str) -> Result<f64, CodecError> {
    value.parse().map_err(|_| CodecError::InvalidSalary {
        line,
        value: value.to_string(),
    })
}

/// Shortest round-trip form: `50000.0`, `1234.56`, or exponent form such
/// as `1e21` for very large and very small magnitudes.
fn format_salary(salary: f64) -> String {
    format!("{salary:?}")
}

#[cfg(test)]
mod tests {
    use super::{decode_records, encode_records, CodecError, Field};
    use crate::model::employee::Employee;

    #[test]
    fn encode_writes_prefixed_blocks_with_separator() {
        let text = encode_records(&[
            Employee::new(1, "Ann", "Eng", 50_000.0),
            Employee::new(2, "Bob", "Sales", 1_234.56),
        ])
        .unwrap();

        assert_eq!(
            text,
            "ID: 1\nName: Ann\nDepartment: Eng\nSalary: 50000.0\n----------------------------\n\
             ID: 2\nName: Bob\nDepartment: Sales\nSalary: 1234.56\n----------------------------\n"
        );
    }

    #[test]
    fn encode_uses_exponent_form_for_extreme_salaries() {
        let employees = vec![
            Employee::new(1, "Big", "Eng", 1e21),
            Employee::new(2, "Tiny", "Eng", 1e-7),
        ];

        let text = encode_records(&employees).unwrap();

        assert!(text.contains("Salary: 1e21\n"));
        assert!(text.contains("Salary: 1e-7\n"));
        assert_eq!(decode_records(&text).unwrap(), employees);
    }

    #[test]
    fn encode_empty_list_is_empty_text() {
        assert_eq!(encode_records(&[]).unwrap(), "");
    }

    #[test]
    fn encode_rejects_line_break_in_text_fields() {
        let err = encode_records(&[Employee::new(4, "Ann", "Eng\nOps", 1.0)]).unwrap_err();
        assert_eq!(
            err,
            CodecError::LineBreakInField {
                id: 4,
                field: Field::Department,
            }
        );
    }

    #[test]
    fn decode_ignores_unknown_and_blank_lines() {
        let text = "# exported roster\n\nID: 3\nName: Cy\nnote: ignored\nDepartment: Ops\nSalary: 10.5\n=====\n";
        let employees = decode_records(text).unwrap();
        assert_eq!(employees, vec![Employee::new(3, "Cy", "Ops", 10.5)]);
    }

    #[test]
    fn decode_keeps_raw_field_remainder() {
        let text = "ID: 5\nName:  padded \nDepartment: \nSalary: 7\n";
        let employees = decode_records(text).unwrap();
        assert_eq!(employees[0].name, " padded ");
        assert_eq!(employees[0].department, "");
        assert_eq!(employees[0].salary, 7.0);
    }

    #[test]
    fn decode_accepts_crlf_line_endings() {
        let text = "ID: 1\r\nName: Ann\r\nDepartment: Eng\r\nSalary: 1.0\r\n";
        let employees = decode_records(text).unwrap();
        assert_eq!(employees, vec![Employee::new(1, "Ann", "Eng", 1.0)]);
    }

    #[test]
    fn decode_prefixes_are_case_sensitive() {
        let text = "id: 1\nID: 2\nname: x\nName: Bea\nDepartment: HR\nSalary: 3.0\n";
        let employees = decode_records(text).unwrap();
        assert_eq!(employees, vec![Employee::new(2, "Bea", "HR", 3.0)]);
    }

    #[test]
    fn decode_reports_invalid_numbers_with_line() {
        let err = decode_records("ID: x1\n").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidId {
                line: 1,
                value: "x1".to_string(),
            }
        );

        let err = decode_records("ID: 1\nName: A\nDepartment: B\nSalary: lots\n").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidSalary {
                line: 4,
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn decode_rejects_out_of_order_fields() {
        let err = decode_records("ID: 1\nDepartment: Eng\n").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnexpectedField {
                line: 2,
                found: Field::Department,
                expected: Field::Name,
            }
        );

        let err = decode_records("Name: orphan\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedField {
                line: 1,
                found: Field::Name,
                expected: Field::Id,
            }
        ));
    }

    #[test]
    fn decode_rejects_truncated_block() {
        let text = "ID: 1\nName: A\nDepartment: B\nSalary: 1.0\n---\nID: 2\nName: C\n";
        let err = decode_records(text).unwrap_err();
        assert_eq!(err, CodecError::IncompleteRecord { line: 6 });
        assert!(err.to_string().contains("line 6"));
    }
}
