//! Small hand-checked dataset shared by unit tests.

use crate::dataset::Dataset;

/// Twelve events across 1993..=2023, eight countries and nine disaster types.
///
/// Includes one "Complex Disasters" row, one "Extra-terrestrial" row, a year
/// (2010, Somalia) with no GDP value and types whose deaths sum to zero.
pub(crate) const SAMPLE_CSV: &str = "\
Dis No,Year,Country,ISO,Disaster Group,Disaster Subgroup,Disaster Type,Total Deaths,No Affected,\"Reconstruction Costs, Adjusted ('000 US$)\",\"Total Damages, Adjusted ('000 US$)\",GDP_per_capita
1993-0001-IND,1993,India,IND,Natural,Hydrological,Flood,120,50000,,2000,300
1993-0002-IND,1993,India,IND,Technological,Industrial accident,Industrial accident,15,200,,,300
1993-0003-USA,1993,United States of America,USA,Natural,Meteorological,Storm,30,1000,500,8000,26000
1995-0004-JPN,1995,Japan,JPN,Natural,Geophysical,Earthquake,5297,1000000,,150000,43000
1995-0005-USA,1995,United States of America,USA,Technological,Transport accident,Transport accident,40,,,,28000
2004-0006-IDN,2004,Indonesia,IDN,Natural,Geophysical,Earthquake,1000,500000,1000,4500,1200
2010-0007-HTI,2010,Haiti,HTI,Natural,Geophysical,Earthquake,2000,3700000,,8000,700
2010-0008-SOM,2010,Somalia,SOM,Natural,Complex Disasters,Drought,20000,3000000,,,
2013-0009-PHL,2013,Philippines,PHL,Natural,Meteorological,Storm,7354,16000000,,10000,2900
2013-0010-RUS,2013,Russia,RUS,Natural,Extra-terrestrial,Impact,,300000,,33,15000
2020-0011-USA,2020,United States of America,USA,Natural,Biological,Epidemic,,,,,63000
2023-0012-USA,2023,United States of America,USA,Technological,Miscellaneous accident,Miscellaneous accident,0,,,,76000
";

pub(crate) fn sample_dataset() -> Dataset {
    Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}
