//! Storage layer for CrystalBudget
//!
//! Persists the [`Snapshot`] as a single JSON file with atomic writes and
//! performs the record-entry checks (validation, unique names, known
//! references) before anything reaches it.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{Snapshot, SNAPSHOT_SCHEMA_VERSION};

use tracing::{debug, info};

use crate::config::paths::CrystalPaths;
use crate::error::{CrystalError, CrystalResult};
use crate::models::{Category, Expense, Income, IncomeSource};

/// Owns the snapshot file and the in-memory snapshot
pub struct Storage {
    paths: CrystalPaths,
    snapshot: Snapshot,
}

impl Storage {
    /// Create storage rooted at `paths`, creating directories as needed
    pub fn new(paths: CrystalPaths) -> CrystalResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            paths,
            snapshot: Snapshot::default(),
        })
    }

    pub fn paths(&self) -> &CrystalPaths {
        &self.paths
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Load the snapshot from disk, migrating older layouts
    ///
    /// A migrated snapshot is written back immediately.
    pub fn load(&mut self) -> CrystalResult<()> {
        let path = self.paths.snapshot_file();
        let file_existed = path.exists();
        self.snapshot = read_json(&path)?;

        if file_existed && self.snapshot.migrate() > 0 {
            self.save()?;
        }

        debug!(
            sources = self.snapshot.income_sources.len(),
            categories = self.snapshot.categories.len(),
            incomes = self.snapshot.incomes.len(),
            expenses = self.snapshot.expenses.len(),
            "loaded snapshot"
        );
        Ok(())
    }

    pub fn save(&self) -> CrystalResult<()> {
        write_json_atomic(self.paths.snapshot_file(), &self.snapshot)
    }

    /// Whether a snapshot file has been written
    pub fn is_initialized(&self) -> bool {
        self.paths.snapshot_file().exists()
    }

    pub fn add_income_source(&mut self, source: IncomeSource) -> CrystalResult<IncomeSource> {
        source
            .validate()
            .map_err(|e| CrystalError::Validation(e.to_string()))?;

        if self.snapshot.find_source(&source.name).is_some() {
            return Err(CrystalError::Duplicate {
                entity_type: "Income source",
                identifier: source.name,
            });
        }

        info!(source = %source.name, "adding income source");
        self.snapshot.income_sources.push(source.clone());
        Ok(source)
    }

    pub fn add_category(&mut self, category: Category) -> CrystalResult<Category> {
        category
            .validate()
            .map_err(|e| CrystalError::Validation(e.to_string()))?;

        if self.snapshot.find_category(&category.name).is_some() {
            return Err(CrystalError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        for allocation in &category.allocations {
            if self.snapshot.source(allocation.income_source_id).is_none() {
                return Err(CrystalError::source_not_found(
                    allocation.income_source_id.to_string(),
                ));
            }
        }

        info!(
            category = %category.name,
            allocations = category.allocations.len(),
            "adding category"
        );
        self.snapshot.categories.push(category.clone());
        Ok(category)
    }

    pub fn add_income(&mut self, income: Income) -> CrystalResult<Income> {
        income
            .validate()
            .map_err(|e| CrystalError::Validation(e.to_string()))?;

        if self.snapshot.source(income.source_id).is_none() {
            return Err(CrystalError::source_not_found(income.source_id.to_string()));
        }

        debug!(amount = %income.amount, date = %income.date, "recording income");
        self.snapshot.incomes.push(income.clone());
        Ok(income)
    }

    pub fn add_expense(&mut self, expense: Expense) -> CrystalResult<Expense> {
        expense
            .validate()
            .map_err(|e| CrystalError::Validation(e.to_string()))?;

        if self.snapshot.category(expense.category_id).is_none() {
            return Err(CrystalError::category_not_found(
                expense.category_id.to_string(),
            ));
        }

        debug!(amount = %expense.amount, date = %expense.date, "recording expense");
        self.snapshot.expenses.push(expense.clone());
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allocation, CategoryId, IncomeSourceId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CrystalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load().unwrap();
        (temp_dir, storage)
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_new_storage_is_empty_and_uninitialized() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.snapshot().income_sources.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut storage) = create_test_storage();
        let salary = storage
            .add_income_source(IncomeSource::new("Salary").with_expected(Money::from_units(3000)))
            .unwrap();
        storage
            .add_category(
                Category::new("Food").with_allocation(Allocation::percent(salary.id, 20.0)),
            )
            .unwrap();
        storage
            .add_income(Income::new(salary.id, Money::from_units(3100), jan(1)))
            .unwrap();
        storage.save().unwrap();

        let paths = CrystalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load().unwrap();
        assert_eq!(reloaded.snapshot(), storage.snapshot());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.add_income_source(IncomeSource::new("Salary")).unwrap();
        let err = storage
            .add_income_source(IncomeSource::new("SALARY"))
            .unwrap_err();
        assert!(matches!(err, CrystalError::Duplicate { .. }));
    }

    #[test]
    fn test_unknown_references_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();

        let err = storage
            .add_category(
                Category::new("Food").with_allocation(Allocation::percent(IncomeSourceId::new(), 5.0)),
            )
            .unwrap_err();
        assert!(err.is_not_found());

        let err = storage
            .add_income(Income::new(IncomeSourceId::new(), Money::from_units(1), jan(1)))
            .unwrap_err();
        assert!(err.is_not_found());

        let err = storage
            .add_expense(Expense::new(CategoryId::new(), Money::from_units(1), jan(1)))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_records_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        let food = storage.add_category(Category::new("Food")).unwrap();
        let err = storage
            .add_expense(Expense::new(food.id, Money::from_cents(-5), jan(2)))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_migrates_legacy_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CrystalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let source_id = "550e8400-e29b-41d4-a716-446655440000";
        let legacy = format!(
            r#"{{
                "income_sources": [{{"id": "{source_id}", "name": "Salary"}}],
                "categories": [{{
                    "id": "6fa459ea-ee8a-3ca4-894e-db77e160355e",
                    "name": "Rent",
                    "linked_source_id": "{source_id}",
                    "allocation_amount": 120000
                }}]
            }}"#
        );
        std::fs::create_dir_all(paths.data_dir()).unwrap();
        std::fs::write(paths.snapshot_file(), legacy).unwrap();

        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load().unwrap();

        let rent = &storage.snapshot().categories[0];
        assert_eq!(rent.allocations.len(), 1);
        assert!(!rent.has_legacy_fields());

        let on_disk: Snapshot = read_json(paths.snapshot_file()).unwrap();
        assert_eq!(on_disk.schema_version, SNAPSHOT_SCHEMA_VERSION);
    }
}
