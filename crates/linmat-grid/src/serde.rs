use crate::grid::Grid;

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T> serde::Serialize for Grid<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Grid", 2)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", &self.shape())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Grid<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct GridData<T> {
            data: Vec<T>,
            shape: [usize; 2],
        }

        let GridData { data, shape } = GridData::deserialize(deserializer)?;

        Grid::from_shape_vec(shape, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let grid = Grid::from_shape_vec([2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let serialized = serde_json::to_string(&grid)?;
        let deserialized: Grid<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(grid, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_rejects_bad_shape() {
        let res = serde_json::from_str::<Grid<f64>>(r#"{"data":[1.0,2.0,3.0],"shape":[2,2]}"#);
        assert!(res.is_err());
    }
}
