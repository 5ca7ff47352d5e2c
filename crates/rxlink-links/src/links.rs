//! Per-record link generation.

use rxlink_model::{DrugFields, SourceColumn};

use crate::sources::SourceBases;

/// The five generated values of one record, in [`SourceColumn`] order.
/// Each value is a URL or `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLinks {
    values: [String; 5],
}

impl SourceLinks {
    pub fn generate(bases: &SourceBases, fields: &DrugFields) -> Self {
        let values = SourceColumn::ALL.map(|column| match column {
            SourceColumn::ActiveIngredient => bases.active_ingredient_url(&fields.active_ingredient),
            SourceColumn::AtcCode => bases.atc_code_url(&fields.atc_code),
            SourceColumn::Company => bases.company_url(&fields.drug_name),
            SourceColumn::UsageInfo => {
                bases.usage_info_url(&fields.drug_name, &fields.active_ingredient)
            }
            SourceColumn::DrugInfo => bases.drug_info_url(&fields.drug_name),
        });
        Self { values }
    }

    pub fn get(&self, column: SourceColumn) -> &str {
        &self.values[column as usize]
    }

    pub fn non_empty_count(&self) -> usize {
        self.values.iter().filter(|value| !value.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceColumn, &str)> {
        SourceColumn::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn into_values(self) -> [String; 5] {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_field_does_not_affect_links() {
        let bases = SourceBases::default();
        let mut fields = DrugFields {
            drug_name: "Parol".to_string(),
            ..DrugFields::default()
        };
        let without_company = SourceLinks::generate(&bases, &fields);
        fields.company = "Atabay".to_string();
        let with_company = SourceLinks::generate(&bases, &fields);

        assert_eq!(without_company, with_company);
        assert_eq!(with_company.non_empty_count(), 3);
        assert_eq!(with_company.get(SourceColumn::AtcCode), "");
    }
}
