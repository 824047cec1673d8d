/// Test helper functions
///
/// Wires a page against the fake server through the real GraphQL repositories
use std::sync::Arc;

use vas_admin_lib::modules::vas::application::VasListPage;
use vas_admin_lib::modules::vas::domain::VasRecord;
use vas_admin_lib::modules::vas::infrastructure::graphql::{
    GraphqlCodeRepository, GraphqlTransport, GraphqlVasRepository,
};
use vas_admin_lib::modules::vas::infrastructure::ui::InMemoryGrid;

use super::fakes::{FakeGraphqlServer, RecordingNotifier, RecordingPopup};

pub const PAGE_SIZE: u32 = 20;

pub struct TestPage {
    pub page: VasListPage,
    pub grid: Arc<InMemoryGrid>,
    pub server: Arc<FakeGraphqlServer>,
    pub notifier: Arc<RecordingNotifier>,
    pub popup: Arc<RecordingPopup>,
}

pub struct TestPageBuilder {
    server: FakeGraphqlServer,
    notifier: RecordingNotifier,
    popup: RecordingPopup,
}

impl TestPageBuilder {
    pub fn new(records: Vec<VasRecord>) -> Self {
        Self {
            server: FakeGraphqlServer::with_records(records),
            notifier: RecordingNotifier::accepting(),
            popup: RecordingPopup::approving(),
        }
    }

    pub fn server(mut self, server: FakeGraphqlServer) -> Self {
        self.server = server;
        self
    }

    pub fn notifier(mut self, notifier: RecordingNotifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn popup(mut self, popup: RecordingPopup) -> Self {
        self.popup = popup;
        self
    }

    pub fn build(self) -> TestPage {
        let server = Arc::new(self.server);
        let transport: Arc<dyn GraphqlTransport> = server.clone();
        let grid = Arc::new(InMemoryGrid::new(PAGE_SIZE));
        let notifier = Arc::new(self.notifier);
        let popup = Arc::new(self.popup);

        let page = VasListPage::new(
            Arc::new(GraphqlVasRepository::new(Arc::clone(&transport))),
            Arc::new(GraphqlCodeRepository::new(transport)),
            grid.clone(),
            notifier.clone(),
            popup.clone(),
        );

        TestPage {
            page,
            grid,
            server,
            notifier,
            popup,
        }
    }

    /// Initialized and activated, with the first page loaded
    pub async fn ready(self) -> TestPage {
        let mut test_page = self.build();
        test_page.page.initialize().await;
        test_page
            .page
            .on_activation_changed(true)
            .await
            .expect("first page should load");
        test_page
    }
}

/// Ids of the rows the grid currently shows, in order
pub fn grid_ids(test_page: &TestPage) -> Vec<String> {
    use vas_admin_lib::modules::vas::traits::DataGrid;

    test_page
        .grid
        .records()
        .into_iter()
        .map(|record| record.id)
        .collect()
}
