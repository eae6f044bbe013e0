//! Pages 项目操作（只读）

use crate::error::Result;

use super::types::PagesProject;
use super::{CloudflareProvider, PagesProjectDetail, PagesProjectSummary};

impl CloudflareProvider {
    /// 获取账户下全部 Pages 项目
    pub async fn list_pages_projects(&self) -> Result<Vec<PagesProjectSummary>> {
        let projects: Vec<PagesProject> = self
            .get(&format!("/accounts/{}/pages/projects", self.account_id))
            .await?;
        Ok(projects.into_iter().map(Self::project_to_summary).collect())
    }

    /// 获取 Pages 项目详情（原样透传）
    pub async fn get_pages_project(&self, project_name: &str) -> Result<PagesProjectDetail> {
        let project: serde_json::Value = self
            .get(&format!(
                "/accounts/{}/pages/projects/{}",
                self.account_id, project_name
            ))
            .await?;
        Ok(PagesProjectDetail(project))
    }

    /// 将 Pages 项目裁剪为摘要输出
    fn project_to_summary(project: PagesProject) -> PagesProjectSummary {
        PagesProjectSummary {
            name: project.name,
            subdomain: project.subdomain,
            domains: project.domains,
            created_on: project.created_on,
            production_branch: project.production_branch,
        }
    }
}
