//! TransactionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use budget_types::{
        AppError, RepoError, SpendingTrend, Transaction, TransactionId, TransactionRepository,
        TransactionRequest,
    };

    use crate::TransactionService;

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        rows: Mutex<BTreeMap<TransactionId, Transaction>>,
        next_id: Mutex<i64>,
        fail: bool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                rows: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
                fail: false,
            }
        }

        /// A repository whose every call fails like an unreachable database.
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.fail {
                Err(RepoError::Database("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl TransactionRepository for MockRepo {
        async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn insert_transaction(
            &self,
            req: TransactionRequest,
        ) -> Result<Transaction, RepoError> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            let id = TransactionId::new(*next_id);
            *next_id += 1;

            let tx = Transaction::from_parts(
                id,
                req.kind,
                req.category,
                req.amount,
                req.date,
                req.description,
            );
            self.rows.lock().unwrap().insert(id, tx.clone());
            Ok(tx)
        }

        async fn get_transaction(
            &self,
            id: TransactionId,
        ) -> Result<Option<Transaction>, RepoError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn update_transaction(
            &self,
            id: TransactionId,
            req: TransactionRequest,
        ) -> Result<Option<Transaction>, RepoError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.get_mut(&id).map(|tx| {
                tx.apply(req);
                tx.clone()
            }))
        }

        async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lunch() -> TransactionRequest {
        TransactionRequest {
            kind: "expense".to_string(),
            category: "food".to_string(),
            amount: 12.5,
            date: date(2024, 1, 1),
            description: Some("lunch".to_string()),
        }
    }

    fn dinner() -> TransactionRequest {
        TransactionRequest {
            amount: 20.0,
            description: Some("dinner".to_string()),
            ..lunch()
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let service = TransactionService::new(MockRepo::new());

        let created = service.create_transaction(lunch()).await.unwrap();
        let all = service.list_transactions().await.unwrap();

        assert_eq!(created.id(), Some(TransactionId::new(1)));
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let service = TransactionService::new(MockRepo::new());

        let a = service.create_transaction(lunch()).await.unwrap();
        let b = service.create_transaction(lunch()).await.unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let service = TransactionService::new(MockRepo::new());
        let created = service.create_transaction(lunch()).await.unwrap();
        let id = created.id().unwrap();

        let updated = service.update_transaction(id, dinner()).await.unwrap();

        assert_eq!(updated.id(), Some(id));
        assert_eq!(TransactionRequest::from(&updated), dinner());
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails_without_writing() {
        let service = TransactionService::new(MockRepo::new());
        let created = service.create_transaction(lunch()).await.unwrap();

        let result = service
            .update_transaction(TransactionId::new(99), dinner())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(id)) if id == TransactionId::new(99)));
        assert_eq!(service.list_transactions().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_get_transaction_not_found() {
        let service = TransactionService::new(MockRepo::new());

        let result = service.get_transaction(TransactionId::new(1)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let service = TransactionService::new(MockRepo::new());
        let created = service.create_transaction(lunch()).await.unwrap();

        service
            .delete_transaction(created.id().unwrap())
            .await
            .unwrap();

        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_ok() {
        let service = TransactionService::new(MockRepo::new());

        let result = service.delete_transaction(TransactionId::new(5)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let service = TransactionService::new(MockRepo::failing());

        let result = service.list_transactions().await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_scenario_create_update_delete() {
        let service = TransactionService::new(MockRepo::new());

        let created = service.create_transaction(lunch()).await.unwrap();
        assert_eq!(created.id(), Some(TransactionId::new(1)));
        assert_eq!(created.amount(), 12.5);

        let updated = service
            .update_transaction(TransactionId::new(1), dinner())
            .await
            .unwrap();
        assert_eq!(updated.amount(), 20.0);
        assert_eq!(updated.description(), Some("dinner"));
        assert_eq!(updated.id(), Some(TransactionId::new(1)));

        service
            .delete_transaction(TransactionId::new(1))
            .await
            .unwrap();
        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_with_budget() {
        let service = TransactionService::new(MockRepo::new()).with_monthly_budget(Some(10.0));
        service.create_transaction(lunch()).await.unwrap();
        service
            .create_transaction(TransactionRequest {
                kind: "income".to_string(),
                category: "salary".to_string(),
                amount: 100.0,
                date: date(2024, 1, 2),
                description: None,
            })
            .await
            .unwrap();

        let summary = service.summary_on(date(2024, 1, 31)).await.unwrap();

        assert_eq!(summary.total_income, 100.0);
        assert_eq!(summary.total_expense, 12.5);
        assert_eq!(summary.net_balance, 87.5);
        let budget = summary.budget.unwrap();
        assert_eq!(budget.month, "2024-01");
        assert_eq!(budget.exceeded_by, Some(2.5));
    }

    #[tokio::test]
    async fn test_summary_without_budget() {
        let service = TransactionService::new(MockRepo::new());
        service.create_transaction(lunch()).await.unwrap();

        let summary = service.summary().await.unwrap();

        assert!(summary.budget.is_none());
        assert_eq!(summary.by_category["food"], 12.5);
    }

    #[tokio::test]
    async fn test_summary_overflow_is_internal_error() {
        let service = TransactionService::new(MockRepo::new());
        for day in [1, 2] {
            service
                .create_transaction(TransactionRequest {
                    kind: "income".to_string(),
                    category: "x".to_string(),
                    amount: 1e308,
                    date: date(2024, 1, day),
                    description: None,
                })
                .await
                .unwrap();
        }

        let result = service.summary_on(date(2024, 1, 2)).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_summary_insights() {
        let service = TransactionService::new(MockRepo::new());
        service.create_transaction(dinner()).await.unwrap();
        service.create_transaction(lunch()).await.unwrap();

        let summary = service.summary_on(date(2024, 1, 31)).await.unwrap();

        assert_eq!(summary.top_expense_category.unwrap().category, "food");
        assert_eq!(summary.spending_trend, Some(SpendingTrend::Decreasing));
    }
}
