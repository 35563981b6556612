//! Integration tests for the PRINTCROP batch driver.

use std::fs;
use std::path::Path;

use printcrop::{
    AspectRatio, Error, PrintSize, ProcessingParams, TargetList, process_directory,
    process_image_to_dir,
};

mod helpers {
    //! Test helpers for fabricating photographs on disk.

    use image::{Rgb, RgbImage};
    use printcrop::{AspectRatio, PrintSize, TargetList};
    use std::path::Path;

    /// Write a gradient test photograph with the given dimensions.
    pub fn write_photo(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        img.save(path).unwrap();
    }

    /// Two small targets: 4:5 at 4x5 in and 5:7 at 5x7 in.
    pub fn small_targets() -> TargetList {
        let mut targets = TargetList::new();
        targets.add(AspectRatio::new(4, 5), PrintSize::new(4, 5));
        targets.add(AspectRatio::new(5, 7), PrintSize::new(5, 7));
        targets
    }

    pub fn decoded_dimensions(path: &Path) -> (u32, u32) {
        let img = image::open(path).unwrap();
        (img.width(), img.height())
    }
}

fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn batch_processes_every_file_and_target() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    helpers::write_photo(&input.path().join("land.png"), 400, 300);
    helpers::write_photo(&input.path().join("portrait.jpg"), 300, 400);

    let params = ProcessingParams::with_targets(helpers::small_targets());
    let report = process_directory(input.path(), output.path(), &params).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.saved, 4);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.errors, 0);

    assert_eq!(
        output_names(output.path()),
        vec![
            "land_4x5_4x5in.jpg",
            "land_5x7_5x7in.jpg",
            "portrait_4x5_4x5in.jpg",
            "portrait_5x7_5x7in.jpg",
        ]
    );

    // Every print lands at exactly inches * 300 pixels.
    assert_eq!(
        helpers::decoded_dimensions(&output.path().join("land_4x5_4x5in.jpg")),
        (1200, 1500)
    );
    assert_eq!(
        helpers::decoded_dimensions(&output.path().join("portrait_5x7_5x7in.jpg")),
        (1500, 2100)
    );
}

#[test]
fn decode_failure_does_not_abort_the_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    // Sorts before the valid file, so the failure happens first.
    fs::write(input.path().join("broken.jpg"), b"definitely not a jpeg").unwrap();
    helpers::write_photo(&input.path().join("good.png"), 200, 200);

    let params = ProcessingParams::with_targets(helpers::small_targets());
    let report = process_directory(input.path(), output.path(), &params).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.saved, 2);
    assert_eq!(
        output_names(output.path()),
        vec!["good_4x5_4x5in.jpg", "good_5x7_5x7in.jpg"]
    );
}

#[test]
fn ineligible_directory_produces_no_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    // A text file, a long-form .tiff (not on the allow-list), and a
    // subdirectory holding an image that must not be found (non-recursive).
    fs::write(input.path().join("notes.txt"), b"not an image").unwrap();
    helpers::write_photo(&input.path().join("long.tiff"), 100, 100);
    let sub = input.path().join("nested");
    fs::create_dir(&sub).unwrap();
    helpers::write_photo(&sub.join("hidden.png"), 100, 100);

    let params = ProcessingParams::with_targets(helpers::small_targets());
    let report = process_directory(input.path(), output.path(), &params).unwrap();

    assert_eq!(report.processed, 0);
    assert_eq!(report.saved, 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.errors, 0);
    assert!(output_names(output.path()).is_empty());
}

#[test]
fn empty_directory_reports_and_terminates() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let params = ProcessingParams::with_targets(helpers::small_targets());
    let report = process_directory(input.path(), output.path(), &params).unwrap();

    assert_eq!(report, printcrop::BatchReport::default());
    assert!(output_names(output.path()).is_empty());
}

#[test]
fn reprocessing_overwrites_existing_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    helpers::write_photo(&input.path().join("photo.png"), 250, 200);

    let params = ProcessingParams::with_targets(helpers::small_targets());
    let first = process_directory(input.path(), output.path(), &params).unwrap();
    let second = process_directory(input.path(), output.path(), &params).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.saved, 2);
    assert_eq!(output_names(output.path()).len(), 2);
}

#[test]
fn single_file_mode_writes_one_print_per_target() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("prints");

    let source = dir.path().join("vacation.bmp");
    helpers::write_photo(&source, 320, 240);

    // Duplicate ratio keys accumulate sizes.
    let mut targets = TargetList::new();
    targets.add(AspectRatio::new(4, 5), PrintSize::new(4, 5));
    targets.add(AspectRatio::new(4, 5), PrintSize::new(8, 10));

    let params = ProcessingParams::with_targets(targets);
    let report = process_image_to_dir(&source, &output, &params).unwrap();

    assert_eq!(report.saved, 2);
    assert_eq!(report.errors, 0);
    assert_eq!(
        output_names(&output),
        vec!["vacation_4x5_4x5in.jpg", "vacation_4x5_8x10in.jpg"]
    );
    assert_eq!(
        helpers::decoded_dimensions(&output.join("vacation_4x5_8x10in.jpg")),
        (2400, 3000)
    );
}

#[test]
fn output_directory_is_created_with_intermediates() {
    let input = tempfile::tempdir().unwrap();
    let out_root = tempfile::tempdir().unwrap();
    let output = out_root.path().join("deep").join("prints");

    helpers::write_photo(&input.path().join("a.png"), 100, 100);

    let params = ProcessingParams::with_targets(helpers::small_targets());
    let report = process_directory(input.path(), &output, &params).unwrap();

    assert!(output.is_dir());
    assert_eq!(report.saved, 2);
}

#[test]
fn empty_target_list_is_a_precondition_failure() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    helpers::write_photo(&input.path().join("a.png"), 100, 100);

    let params = ProcessingParams::default();
    let err = process_directory(input.path(), output.path(), &params).unwrap_err();
    assert!(matches!(err, Error::EmptyTargets));

    let err =
        process_image_to_dir(&input.path().join("a.png"), output.path(), &params).unwrap_err();
    assert!(matches!(err, Error::EmptyTargets));
    assert!(output_names(output.path()).is_empty());
}
