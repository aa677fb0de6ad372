// Catch all tests for the library

use libiddiff::diffs;
use libiddiff::error::IddiffError;
use libiddiff::opts::DiffOpts;
use libiddiff::test;

#[test]
fn test_self_diff_has_no_changed_rows() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V1, |file_1, file_2| {
        let output = diffs::diff_files(file_1, file_2, &DiffOpts::default())?;

        assert!(output.contains("<table"));
        assert!(!output.contains("class=\"lblock\""));
        assert!(!output.contains("Skipping"));
        Ok(())
    })
}

#[test]
fn test_output_is_byte_identical_across_runs() -> Result<(), IddiffError> {
    test::run_diff_files_test(test::DRAFT_V1, test::DRAFT_V2, |file_1, file_2| {
        let opts = DiffOpts::default();
        let first = diffs::diff_files(file_1, file_2, &opts)?;
        let second = diffs::diff_files(file_1, file_2, &opts)?;

        assert_eq!(first, second);
        Ok(())
    })
}
