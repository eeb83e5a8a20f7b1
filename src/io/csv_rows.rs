use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord, StringRecordsIntoIter};

use crate::core::device::row::DeviceRow;
use crate::error::Result;

/// Streams validated `DeviceRow`s from a headed, UTF-8 model CSV
pub struct DeviceRowReader<R: Read> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
    row: usize,
}

impl DeviceRowReader<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(File::open(path)?)
    }
}

impl<R: Read> DeviceRowReader<R> {
    pub fn new(input: R) -> Result<Self> {
        let mut reader = Reader::from_reader(input);
        let headers = reader.headers()?.clone();
        Ok(Self {
            headers,
            records: reader.into_records(),
            row: 0,
        })
    }
}

impl<R: Read> Iterator for DeviceRowReader<R> {
    type Item = Result<DeviceRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.row += 1;
        Some(
            record
                .map_err(Into::into)
                .and_then(|rec| DeviceRow::from_record(&self.headers, &rec, self.row)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::device::row::tests::HEADER;
    use crate::error::Error;

    #[test]
    fn yields_rows_in_order() {
        let data = format!(
            "{}\nA,false,1,0,0,0,0,0,0,,,,,ac,10,2\nB,true,2,0,0,0,0,0,0,,,,,ac,11,3\n",
            HEADER
        );
        let rows: Vec<_> = DeviceRowReader::new(data.as_bytes())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        let models: Vec<&str> = rows.iter().map(|r: &DeviceRow| r.model.as_str()).collect();
        assert_eq!(models, ["A", "B"]);
    }

    #[test]
    fn reports_row_number_of_bad_row() {
        let data = format!(
            "{}\nA,false,1,0,0,0,0,0,0,,,,,ac,10,2\nB,false,x,0,0,0,0,0,0,,,,,ac,10,2\n",
            HEADER
        );
        let mut reader = DeviceRowReader::new(data.as_bytes()).unwrap();
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next().unwrap(),
            Err(Error::InvalidCount { row: 2, .. })
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn short_record_is_a_csv_error() {
        let data = format!("{}\nA,false,1\n", HEADER);
        let mut reader = DeviceRowReader::new(data.as_bytes()).unwrap();
        assert!(matches!(reader.next().unwrap(), Err(Error::Csv(_))));
    }
}
