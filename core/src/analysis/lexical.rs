//! Line-oriented scan for raises inside nounwind function bodies.
//!
//! The scan is lexical on purpose. It strips `//` comments, recognizes
//! `extern "C" fn` signatures (an `extern "C-unwind" fn` may unwind and is
//! not a match), delimits bodies by brace depth, and records raise markers
//! it sees between the braces. It does not tokenize string literals, does
//! not handle signatures split across lines, and above all does not follow
//! calls into other functions.

/// Tokens treated as raise sites when they appear inside a nounwind body.
const RAISE_MARKERS: &[&str] = &[
    "panic!",
    "panic_any",
    "unreachable!",
    "todo!",
    "unimplemented!",
    "assert!",
    "assert_eq!",
    "assert_ne!",
];

/// A raise marker observed inside a nounwind body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line in the scanned source.
    pub line: usize,
    pub marker: &'static str,
}

/// Scan result for a single nounwind function.
#[derive(Debug, Clone)]
pub struct FunctionScan {
    pub name: String,
    /// 1-based line of the signature.
    pub line: usize,
    /// Where the source came from, when scanned from disk.
    pub origin: Option<String>,
    pub findings: Vec<Finding>,
}

/// What the scan concluded about one nounwind function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A raise marker was found in the body.
    Flagged,
    /// Nothing visible lexically. Says nothing about callees.
    LooksClean,
}

#[derive(Debug, Default)]
pub struct Report {
    pub functions: Vec<FunctionScan>,
}

impl FunctionScan {
    pub fn verdict(&self) -> Verdict {
        if self.findings.is_empty() {
            Verdict::LooksClean
        } else {
            Verdict::Flagged
        }
    }
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn merge(&mut self, other: Report) {
        self.functions.extend(other.functions);
    }

    /// Verdict for a scanned function, by name. `None` when the scan never
    /// saw a nounwind function of that name.
    pub fn verdict(&self, function: &str) -> Option<Verdict> {
        self.functions
            .iter()
            .find(|scan| scan.name == function)
            .map(|scan| scan.verdict())
    }
}

struct Active {
    scan: FunctionScan,
    depth: i32,
    entered: bool,
}

/// Scans source text for nounwind functions and raise markers in their
/// bodies.
pub fn scan_source(source: &str) -> Report {
    let mut functions: Vec<FunctionScan> = Vec::new();
    let mut active: Option<Active> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line = strip_line_comment(raw);
        let number = idx + 1;

        if active.is_none() {
            let Some(name) = nounwind_signature(line) else {
                continue;
            };
            active = Some(Active {
                scan: FunctionScan {
                    name,
                    line: number,
                    origin: None,
                    findings: Vec::new(),
                },
                depth: 0,
                entered: false,
            });
        }

        let finished = match active.as_mut() {
            Some(current) => {
                consume(current, line, number);
                current.entered && current.depth <= 0
            }
            None => false,
        };

        if finished {
            if let Some(done) = active.take() {
                functions.push(done.scan);
            }
        }
    }

    Report { functions }
}

/// Records markers and tracks brace depth for one line of an active
/// function.
fn consume(active: &mut Active, line: &str, number: usize) {
    if active.entered || line.contains('{') {
        for &marker in RAISE_MARKERS {
            if line.contains(marker) {
                active.scan.findings.push(Finding {
                    line: number,
                    marker,
                });
            }
        }
    }

    for ch in line.chars() {
        match ch {
            '{' => {
                active.depth += 1;
                active.entered = true;
            }
            '}' => active.depth -= 1,
            _ => {}
        }
    }
}

/// Extracts the function name from a nounwind signature line, if this line
/// starts one.
fn nounwind_signature(line: &str) -> Option<String> {
    let (_, rest) = line.split_once("extern \"C\" fn ")?;
    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}

fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_direct_raise_in_nounwind_body() {
        let source = r#"
            extern "C" fn boom() {
                panic_any(10);
            }
        "#;
        let report = scan_source(source);
        assert_eq!(report.verdict("boom"), Some(Verdict::Flagged));
        assert_eq!(report.functions[0].findings[0].marker, "panic_any");
    }

    #[test]
    fn misses_raise_hidden_in_callee() {
        let source = r#"
            fn kill() {
                panic_any(10);
            }

            extern "C" fn looks_fine() {
                kill();
            }
        "#;
        let report = scan_source(source);
        assert_eq!(report.verdict("looks_fine"), Some(Verdict::LooksClean));
        assert_eq!(report.verdict("kill"), None);
    }

    #[test]
    fn ignores_commented_out_raises() {
        let source = r#"
            extern "C" fn quiet() {
                // panic!("not really");
                let _x = 1;
            }
        "#;
        let report = scan_source(source);
        assert_eq!(report.verdict("quiet"), Some(Verdict::LooksClean));
    }

    #[test]
    fn c_unwind_abi_is_not_a_nounwind_contract() {
        let source = r#"
            extern "C-unwind" fn may_unwind() {
                panic!("allowed to leave");
            }
        "#;
        let report = scan_source(source);
        assert!(report.is_empty());
    }

    #[test]
    fn handles_one_line_bodies_and_qualifiers() {
        let source = r#"
            pub unsafe extern "C" fn tiny() { unreachable!() }
        "#;
        let report = scan_source(source);
        assert_eq!(report.verdict("tiny"), Some(Verdict::Flagged));
    }

    #[test]
    fn scans_multiple_functions_independently() {
        let source = r#"
            extern "C" fn first() {
                debug_assert!(true);
            }

            fn plain() {
                panic!("not scanned");
            }

            extern "C" fn second() {
                let _ = 2;
            }
        "#;
        let report = scan_source(source);
        assert_eq!(report.functions.len(), 2);
        assert_eq!(report.verdict("first"), Some(Verdict::Flagged));
        assert_eq!(report.verdict("second"), Some(Verdict::LooksClean));
        assert_eq!(report.verdict("plain"), None);
    }

    #[test]
    fn records_signature_line_numbers() {
        let source = "extern \"C\" fn on_line_one() {\n    todo!()\n}\n";
        let report = scan_source(source);
        assert_eq!(report.functions[0].line, 1);
        assert_eq!(report.functions[0].findings[0].line, 2);
    }
}
