pub mod classes;
pub mod eleves;
pub mod professeurs;

pub use classes::ClasseService;
pub use eleves::EleveService;
pub use professeurs::ProfesseurService;

use actix_web::HttpRequest;

use crate::middlewares::RequireJWT;
use crate::models::ProjectionContext;
use crate::utils::version::ApiVersion;

// 从请求构造投影上下文与缓存分区所需的角色列表
pub(crate) fn request_projection(request: &HttpRequest) -> (Vec<String>, ProjectionContext) {
    let roles = RequireJWT::extract_roles(request);
    let ctx = ProjectionContext::new(ApiVersion::from_request(request), &roles);
    (roles, ctx)
}
