use crate::model::api::PaginatedDto;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// One page of domain models plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Builds a page, deriving `total_pages` from `total` and `per_page`.
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Converts every item, keeping the pagination metadata.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }

    /// Converts every item into its DTO and wraps the page for the response.
    pub fn into_dto<U, F>(self, f: F) -> PaginatedDto<U>
    where
        F: FnMut(T) -> U,
    {
        let page = self.map(f);

        PaginatedDto {
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages_rounding_up() {
        assert_eq!(Paginated::<i32>::new(vec![], 0, 0, 10).total_pages, 0);
        assert_eq!(Paginated::<i32>::new(vec![], 10, 0, 10).total_pages, 1);
        assert_eq!(Paginated::<i32>::new(vec![], 11, 0, 10).total_pages, 2);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Paginated::new(vec![1, 2], 12, 1, 2).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 12);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 6);
    }
}
