use crate::web_app::api::ListQuery;
use crate::web_app::model::Pagination;

/// Category/search/page selection shared by the filterable stores
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub selected_category: Option<String>,
    pub search_query: String,
    pub pagination: Pagination,
}

impl ListFilters {
    /// The list request these filters describe
    pub fn query(&self, limit: u32) -> ListQuery {
        let search = self.search_query.trim();
        ListQuery {
            page: self.pagination.current_page.max(1),
            limit,
            category: self.selected_category.clone(),
            search: (!search.is_empty()).then(|| search.to_string()),
            featured: None,
        }
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category.filter(|c| !c.is_empty());
        self.pagination.current_page = 1;
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.pagination.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.pagination.current_page = page.max(1);
    }

    pub fn clear(&mut self) {
        self.selected_category = None;
        self.search_query.clear();
        self.pagination.current_page = 1;
    }

    pub fn is_filtered(&self) -> bool {
        self.selected_category.is_some() || !self.search_query.trim().is_empty()
    }
}
