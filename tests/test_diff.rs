use libiddiff::core::align;
use libiddiff::core::tokenize;
use libiddiff::core::word_diff::TokenDiff;
use libiddiff::diffs;
use libiddiff::error::IddiffError;
use libiddiff::opts::{DiffMode, DiffOpts};
use libiddiff::render;
use libiddiff::test;

#[test]
fn test_side_by_side_page_structure() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V2, |file_1, file_2| {
        let output = diffs::diff_files(file_1, file_2, &DiffOpts::default())?;

        assert!(output.contains("<html"));
        assert!(output.contains("<table"));
        assert!(output.contains("draft-smoke-signals-00.txt"));
        assert!(output.contains("draft-smoke-signals-01.txt"));
        assert!(output.trim().ends_with("</html>"));
        Ok(())
    })
}

#[test]
fn test_side_by_side_marks_changed_words() -> Result<(), IddiffError> {
    let diff = diffs::compute(
        test::DRAFT_V1,
        test::DRAFT_V2,
        None,
        None,
        &DiffOpts::default(),
    )?;
    let output = render::render(&diff, &DiffOpts::default(), &TokenDiff)?;

    assert!(output.contains("<span class=\"delete\">"));
    assert!(output.contains("<span class=\"insert\">"));
    // the unchanged abstract opening appears on both sides
    assert!(output.contains("Smoke signals are one of the oldest"));
    // page footers and running headers never reach the diff
    assert!(!output.contains("[Page 1]"));
    assert!(!output.contains("Smoke Signals"));
    Ok(())
}

#[test]
fn test_side_by_side_small_context_elides_unchanged_text() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V2, |file_1, file_2| {
        let opts = DiffOpts {
            context_lines: 1,
            ..DiffOpts::default()
        };
        let output = diffs::diff_files(file_1, file_2, &opts)?;

        assert!(output.contains("Skipping"));
        // the first line is unchanged and outside every context window
        assert!(!output.contains("Network Working Group"));
        Ok(())
    })
}

#[test]
fn test_table_only_output() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V2, |file_1, file_2| {
        let opts = DiffOpts {
            table_only: true,
            ..DiffOpts::default()
        };
        let output = diffs::diff_files(file_1, file_2, &opts)?;

        assert!(!output.contains("<html"));
        assert!(output.trim().starts_with("<table"));
        assert!(output.trim().ends_with("</table>"));
        Ok(())
    })
}

#[test]
fn test_abdiff_renders_old_and_new_blocks() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V2, |file_1, file_2| {
        let output = diffs::diff_files(file_1, file_2, &DiffOpts::with_mode(DiffMode::Abdiff))?;

        assert!(output.contains("OLD:"));
        assert!(output.contains("NEW:"));
        assert!(output.contains("Expires: 24 June 2022"));
        assert!(output.contains("Expires: 6 November 2022"));
        assert!(output.trim().ends_with("</html>"));
        Ok(())
    })
}

#[test]
fn test_chbars_marks_changed_lines() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V2, |file_1, file_2| {
        let output = diffs::diff_files(file_1, file_2, &DiffOpts::with_mode(DiffMode::Chbars))?;

        assert!(output.contains("|Expires: 6 November 2022"));
        assert!(output.contains(" Network Working Group"));
        // deleted-only content is not part of the rendered document
        assert!(!output.contains("Expires: 24 June 2022"));
        assert!(output.trim().ends_with("</html>"));
        Ok(())
    })
}

#[test]
fn test_wdiff_plain_text_markers() -> Result<(), IddiffError> {
    let opts = DiffOpts::with_mode(DiffMode::Wdiff);
    let diff = diffs::compute(test::DRAFT_V1, test::DRAFT_V2, None, None, &opts)?;
    let output = render::render(&diff, &opts, &TokenDiff)?;

    assert!(output.contains("[-"));
    assert!(output.contains("-]"));
    assert!(output.contains("{+"));
    assert!(output.contains("+}"));
    assert!(!output.contains("<html"));
    Ok(())
}

#[test]
fn test_hwdiff_html_markers() -> Result<(), IddiffError> {
    let opts = DiffOpts::with_mode(DiffMode::Hwdiff);
    let diff = diffs::compute(test::DRAFT_V1, test::DRAFT_V2, None, None, &opts)?;
    let output = render::render(&diff, &opts, &TokenDiff)?;

    assert!(output.contains("<pre"));
    assert!(output.contains("class=\"w-delete\""));
    assert!(output.contains("class=\"w-insert\""));
    assert!(!output.contains("<table"));
    assert!(output.trim().ends_with("</html>"));
    Ok(())
}

#[test]
fn test_skip_whitespace_hides_blank_line_churn() -> Result<(), IddiffError> {
    let left = "first\n\n\n\nlast\n";
    let right = "first\n\nlast\n";
    let opts = DiffOpts {
        skip_whitespace: true,
        ..DiffOpts::default()
    };
    let output = diffs::diff_text(left, right, &opts)?;

    assert!(!output.contains("class=\"lblock\""));
    assert!(!output.contains("Skipping"));
    Ok(())
}

#[test]
fn test_whitespace_only_changed_rows_are_dropped() -> Result<(), IddiffError> {
    // the middle lines differ but are both whitespace-only, so the changed
    // row renders two empty cells and is omitted
    let output = diffs::diff_text("a\n   \nb\n", "a\n\t\nb\n", &DiffOpts::default())?;

    assert!(!output.contains("class=\"lblock\""));
    Ok(())
}

#[test]
fn test_missing_file_is_a_user_error() -> Result<(), IddiffError> {
    let err = diffs::diff_files("missing-00.txt", "missing-01.txt", &DiffOpts::default());

    match err {
        Err(IddiffError::FileNotFound(message)) => {
            assert!(format!("{message}").contains("missing-00.txt"));
            Ok(())
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_alignment_reconstructs_both_documents() -> Result<(), IddiffError> {
    let left = tokenize::tokenize(test::DRAFT_V1, false);
    let right = tokenize::tokenize(test::DRAFT_V2, false);
    let ops = align::align(&left, &right);
    align::verify_coverage(&ops, left.len(), right.len())?;

    let left_texts: Vec<&str> = ops
        .iter()
        .filter_map(|op| op.left_index())
        .map(|index| left.text(index))
        .collect();
    assert_eq!(left_texts.join("\n"), left.joined());

    let right_texts: Vec<&str> = ops
        .iter()
        .filter_map(|op| op.right_index())
        .map(|index| right.text(index))
        .collect();
    assert_eq!(right_texts.join("\n"), right.joined());
    Ok(())
}

#[test]
fn test_hunks_are_disjoint_and_ordered() -> Result<(), IddiffError> {
    let opts = DiffOpts {
        context_lines: 1,
        ..DiffOpts::default()
    };
    let diff = diffs::compute(test::DRAFT_V1, test::DRAFT_V2, None, None, &opts)?;

    assert!(diff.hunks.len() > 1);
    for pair in diff.hunks.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    Ok(())
}
