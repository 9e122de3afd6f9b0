//! Bundled sample analysis for degraded mode.
//!
//! Returned verbatim when no provider can serve a live answer, so the
//! caller always gets usable text.

/// Precomputed analysis of an example startup idea.
pub const SAMPLE_ANALYSIS: &str = r"**1. IDEA VALIDATION SCORE**: 8.7/10

The Agentic AI agency concept shows strong potential due to the rapidly growing AI automation market ($15.7B in 2024, projected to reach $45.2B by 2030 at 23.4% CAGR).

**2. MARKET ANALYSIS**:

**Total Addressable Market (TAM)**:
- Global AI services market: $150+ billion by 2030
- AI automation specifically: $45.2 billion by 2030
- Enterprise AI adoption: 85% of businesses planning AI integration by 2025

**Market Consensus & Industry Trends**:
- Strong positive sentiment toward AI automation
- Shift from simple chatbots to sophisticated agentic systems

**Competitive Landscape Analysis**:
- Major players: OpenAI, Anthropic, Google AI, Microsoft
- Specialized agencies emerging rapidly, high fragmentation in delivery

**Market Entry Barriers**:
- Technical expertise requirements
- High initial talent acquisition costs
- Need for proven case studies

**3. STRENGTHS & OPPORTUNITIES**:

- Growing market demand: exponential increase in AI adoption
- High-value services: premium pricing for specialized implementation
- Recurring revenue model: ongoing optimization contracts
- First-mover advantage in a rapidly evolving market

**4. POTENTIAL FLAWS/RISKS**:

- Rapid technology obsolescence
- Dependence on third-party AI platforms
- High competition from tech giants
- Long sales cycles for enterprise clients

**5. FUTURE RISKS**:

- No-code AI platforms reducing need for agencies
- Increasing AI regulation and compliance requirements
- Commoditization of basic AI services

**6. PRESENT HURDLES**:

- Established consulting firms with AI divisions
- High upfront investment in AI infrastructure
- Case study development requirements

**7. RELEVANT VCs/INVESTORS**:

| VC/Investor | Focus Area | Contact | Recent AI Investments |
|-------------|------------|---------|----------------------|
| **Andreessen Horowitz** | Enterprise AI | linkedin.com/company/andreessen-horowitz | OpenAI, Databricks |
| **Sequoia Capital** | AI Infrastructure | linkedin.com/company/sequoia-capital | OpenAI, Character.AI |
| **Index Ventures** | AI/ML Startups | linkedin.com/company/index-ventures | Cohere, Scale AI |

**8. HOW ACTA CAN HELP**:

- Strategic planning: market positioning and differentiation strategy
- Business development: customer discovery and validation
- Growth acceleration: scaling strategies and operational efficiency
- Funding support: investor readiness and pitch deck development

**9. EMAIL TEMPLATES**:

**Template 1: Initial VC Outreach**

Subject: Seeking Investment for Agentic AI Agency - $45B Market Opportunity

Dear [Investor Name],

I'm [Your Name], founder of [Company Name], reaching out because of your track record investing in AI infrastructure companies. We're building an Agentic AI agency helping mid-market companies implement AI automation. We're currently raising [Amount] and would welcome the opportunity to discuss this with you.

Best regards,
[Your Name]

**Template 2: Follow-up**

Subject: Follow-up: Agentic AI Agency Investment Opportunity

Dear [Investor Name],

Thank you for taking the time to discuss [Company Name]. As requested, I'm attaching our updated materials including financial projections and case studies.

Best regards,
[Your Name]

**Template 3: Partnership Outreach**

Subject: Strategic Partnership Opportunity - AI Implementation Services

Dear [Partner Name],

I'm [Your Name] from [Company Name]. We specialize in enterprise AI implementations and could help accelerate your customers' adoption of your platform. Would you be available for a brief call?

Best regards,
[Your Name]";
