use std::error::Error;

use csv::Reader;
use num_enum::TryFromPrimitive;

use common::MotionSample;

#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, TryFromPrimitive)]
pub enum CsvFileColumn {
    Timestamp,
    Roll,
    RotationRate,
}

impl From<CsvFileColumn> for usize {
    fn from(value: CsvFileColumn) -> Self {
        value as usize
    }
}

#[derive(Clone, Debug, Default)]
pub struct CsvColumnMapper {
    columns: Vec<usize>,
}

impl CsvColumnMapper {
    pub fn new() -> Self {
        Self { columns: vec![] }
    }

    pub fn columns(&self) -> Vec<usize> {
        self.columns.clone()
    }

    pub fn add_timestamp(&mut self) -> &mut Self {
        self.columns.push(CsvFileColumn::Timestamp.into());
        self
    }

    pub fn add_roll(&mut self) -> &mut Self {
        self.columns.push(CsvFileColumn::Roll.into());
        self
    }

    pub fn add_rotation_rate(&mut self) -> &mut Self {
        self.columns.push(CsvFileColumn::RotationRate.into());
        self
    }
}

pub fn load_csv(file_path: &str) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    let mut rdr = Reader::from_path(file_path)?;
    let mut data = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row: Vec<f64> = record
            .iter()
            .filter_map(|s| s.trim().parse::<f64>().ok())
            .collect();
        data.push(row);
    }

    Ok(data)
}

pub fn load_csv_columns<T: TryFrom<Vec<f64>>>(
    file_path: &str,
    columns: &[usize],
) -> Result<Vec<T>, Box<dyn Error>> {
    if columns.is_empty() {
        return Err("No columns provided".into());
    }

    let data = load_csv(file_path)?;

    data.into_iter()
        .map(|row| -> Result<T, Box<dyn Error>> {
            let values = columns
                .iter()
                .map(|&i| {
                    row.get(i)
                        .copied()
                        .ok_or_else(|| format!("Column index {} out of bounds", i))
                })
                .collect::<Result<Vec<f64>, String>>()?;
            T::try_from(values).map_err(|_| "Failed to convert to T".into())
        })
        .collect()
}

/// Loads timestamp, roll and rotation rate of every row as motion samples.
pub fn load_motion_trace(file_path: &str) -> Result<Vec<MotionSample>, Box<dyn Error>> {
    let mut mapper = CsvColumnMapper::new();
    mapper.add_timestamp().add_roll().add_rotation_rate();
    load_csv_columns::<MotionSample>(file_path, &mapper.columns())
}

/// Loads only the roll column.
pub fn load_rolls(file_path: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    Ok(load_motion_trace(file_path)?
        .iter()
        .map(|sample| sample.get_roll())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ONE_FLIP_FACE_DOWN, TWO_FLIPS_FACE_UP};

    #[test]
    fn test_read_csv() {
        let data = load_csv(TWO_FLIPS_FACE_UP).unwrap();
        assert!(!data.is_empty());
        assert!(data.iter().all(|row| row.len() == 3));
    }

    #[test]
    #[should_panic(expected = "No such file or directory")]
    fn test_read_inexistent_csv() {
        let _ = load_csv("./test_data/flip_tracess.csv").unwrap();
    }

    #[test]
    fn test_column_enum_from_index() {
        assert_eq!(CsvFileColumn::try_from(1usize).unwrap(), CsvFileColumn::Roll);
        assert!(CsvFileColumn::try_from(3usize).is_err());
    }

    #[test]
    fn test_load_csv_columns_order() {
        let mut mapper = CsvColumnMapper::new();
        mapper.add_roll().add_timestamp();
        let data = load_csv_columns::<Vec<f64>>(TWO_FLIPS_FACE_UP, &mapper.columns()).unwrap();
        assert_eq!(data[1].len(), 2);
        // second row: roll first, then timestamp 0.05
        assert_eq!(data[1][1], 0.05);
    }

    #[test]
    fn test_load_csv_no_columns() {
        assert!(load_csv_columns::<Vec<f64>>(TWO_FLIPS_FACE_UP, &[]).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_load_csv_incorrect_columns() {
        load_csv_columns::<Vec<f64>>(TWO_FLIPS_FACE_UP, &[0, 1, 20]).unwrap();
    }

    #[test]
    #[should_panic(expected = "Failed to convert to T")]
    fn test_fail_load_csv_as_motion_sample() {
        load_csv_columns::<MotionSample>(TWO_FLIPS_FACE_UP, &[0]).unwrap();
    }

    #[test]
    fn test_load_motion_trace() {
        let samples = load_motion_trace(ONE_FLIP_FACE_DOWN).unwrap();
        assert_eq!(samples.len(), 32);
        assert!(samples.iter().all(|s| s.get_rotation_rate().is_some()));
        assert_eq!(load_rolls(ONE_FLIP_FACE_DOWN).unwrap().len(), 32);
    }
}
