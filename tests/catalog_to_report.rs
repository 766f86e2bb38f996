use std::io::Write;

use yso_sed::config::SedConfig;
use yso_sed::data::loader::load_file;
use yso_sed::report::text_report;
use yso_sed::sed::classify::YsoClass;
use yso_sed::sed::pipeline::Pipeline;

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "designation,w1mpro,w2mpro,w3mpro,w4mpro\n\
         J053512.34-052318.9,8.0,7.5,6.0,4.0\n\
         J053514.10-052230.2,,9.2,9.5,9.8\n\
         J053520.77-052140.5,9.0,9.2,9.5,9.8\n\
         J053522.01-052005.3,11.0,9.6,6.1,3.2\n"
    )
    .unwrap();
    file
}

#[test]
fn csv_catalog_end_to_end() {
    let file = catalog_file();
    let catalog = load_file(file.path()).unwrap();
    let results = Pipeline::default().run(&catalog.records);

    let classes: Vec<YsoClass> = results.iter().map(|r| r.class).collect();
    assert_eq!(
        classes,
        [
            YsoClass::ClassII,
            YsoClass::NotClassified,
            YsoClass::ClassIII,
            YsoClass::ClassI,
        ]
    );
    assert_eq!(
        text_report(&results),
        "J053512.34-052318.9 : Class II\n\
         J053514.10-052230.2 : Not Classified\n\
         J053520.77-052140.5 : Class III\n\
         J053522.01-052005.3 : Class I\n"
    );
}

#[test]
fn configured_bands_flow_through() {
    let file = catalog_file();
    let catalog = load_file(file.path()).unwrap();

    let bands = SedConfig::from_toml_str("[bands.w4]\nwavelength_um = 22.88\n")
        .unwrap()
        .band_set()
        .unwrap();
    let default = Pipeline::default().run(&catalog.records);
    let custom = Pipeline::new(bands).run(&catalog.records);

    assert_eq!(default.len(), custom.len());
    assert_ne!(default[0].spectral_index, custom[0].spectral_index);
    assert_eq!(custom[1].class, YsoClass::NotClassified);
}
